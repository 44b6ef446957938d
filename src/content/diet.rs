//! Diet guide: food lists, daily meal plans and per-disease advice.

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Lines, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietPreference {
    #[default]
    Veg,
    NonVeg,
}

impl DietPreference {
    #[must_use]
    pub fn from_non_veg(non_veg: bool) -> Self {
        if non_veg { Self::NonVeg } else { Self::Veg }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MealPlan {
    pub time: MealTime,
    pub veg: Text,
    pub non_veg: Text,
}

impl MealPlan {
    #[must_use]
    pub fn meal(&self, preference: DietPreference) -> &Text {
        match preference {
            DietPreference::Veg => &self.veg,
            DietPreference::NonVeg => &self.non_veg,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DiseaseDiet {
    pub disease_id: &'static str,
    pub recommendation: Text,
}

#[derive(Debug, Clone, Copy)]
pub struct DietPlan {
    pub healthy_foods: Lines,
    pub avoid_foods: Lines,
    pub daily: &'static [MealPlan],
    pub disease_diet: &'static [DiseaseDiet],
}

/// One meal slot in one language.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub time: MealTime,
    pub meal: String,
}

#[must_use]
pub fn diet_plan() -> &'static DietPlan {
    &DIET
}

/// Recommendation for a disease, if the catalog has one.
#[must_use]
pub fn diet_for_disease(disease_id: &str) -> Option<&'static DiseaseDiet> {
    DIET.disease_diet.iter().find(|entry| entry.disease_id == disease_id)
}

/// Morning-to-night meals for the given preference.
#[must_use]
pub fn daily_meals(preference: DietPreference, lang: Language) -> Vec<Meal> {
    DIET.daily
        .iter()
        .map(|plan| Meal { time: plan.time, meal: plan.meal(preference).get(lang) })
        .collect()
}

// =============================================================================
// CATALOG
// =============================================================================

static DIET: DietPlan = DietPlan {
    healthy_foods: Lines::new(
        &["Leafy Greens", "Whole Grains", "Fresh Fruits", "Nuts & Seeds", "Legumes", "Low-fat Dairy"],
        &["हरी पत्तेदार सब्जियां", "साबुत अनाज", "ताजे फल", "मेवे और बीज", "फलियां", "कम वसा वाले डेयरी उत्पाद"],
    ),
    avoid_foods: Lines::new(
        &[
            "Processed Sugar",
            "Deep Fried Foods",
            "Excessive Salt",
            "Carbonated Drinks",
            "Refined Flour (Maida)",
            "Trans Fats",
        ],
        &["प्रसंस्कृत चीनी", "ज्यादा तला हुआ खाना", "अत्यधिक नमक", "कार्बोनेटेड पेय", "मैदा", "ट्रांस फैट"],
    ),
    daily: &[
        MealPlan {
            time: MealTime::Morning,
            veg: Text::new(
                "Oatmeal with fruits or Poha with vegetables. Herbal tea or lukewarm lemon water.",
                "फलों के साथ ओट्स या सब्जियों के साथ पोहा। हर्बल चाय या गुनगुना नींबू पानी।",
            ),
            non_veg: Text::new(
                "Boiled egg whites with whole grain toast. Fresh orange juice.",
                "साबुत अनाज टोस्ट के साथ उबले अंडे की सफेदी। ताजा संतरे का रस।",
            ),
        },
        MealPlan {
            time: MealTime::Afternoon,
            veg: Text::new(
                "Brown rice or 2 multigrain rotis, dal, seasonal vegetable, and a bowl of curd.",
                "ब्राउन राइस या 2 मल्टीग्रेन रोटी, दाल, मौसमी सब्जी और एक कटोरी दही।",
            ),
            non_veg: Text::new(
                "Grilled chicken or fish with a large portion of green salad and steamed vegetables.",
                "हरी सलाद और उबली हुई सब्जियों के बड़े हिस्से के साथ ग्रिल्ड चिकन या मछली।",
            ),
        },
        MealPlan {
            time: MealTime::Evening,
            veg: Text::new(
                "Roasted makhana or a handful of nuts. Green tea.",
                "भुना हुआ मखाना या मुट्ठी भर मेवे। ग्रीन टी।",
            ),
            non_veg: Text::new(
                "Chicken clear soup or small portion of tuna salad.",
                "चिकन क्लियर सूप या टूना सलाद का छोटा हिस्सा।",
            ),
        },
        MealPlan {
            time: MealTime::Night,
            veg: Text::new(
                "Light vegetable soup, 1 roti or small portion of khichdi. Finish 2-3 hours before sleep.",
                "हल्का वेजिटेबल सूप, 1 रोटी या खिचड़ी का छोटा हिस्सा। सोने से 2-3 घंटे पहले समाप्त करें।",
            ),
            non_veg: Text::new(
                "Baked fish or lean turkey with sautéed broccoli and asparagus.",
                "सॉते की हुई ब्रोकली और शतावरी के साथ बेक्ड फिश या लीन टर्की।",
            ),
        },
    ],
    disease_diet: &[
        DiseaseDiet {
            disease_id: "diabetes",
            recommendation: Text::new(
                "Focus on low glycemic index foods. High fiber, low sugar.",
                "कम ग्लाइसेमिक इंडेक्स वाले खाद्य पदार्थों पर ध्यान दें। उच्च फाइबर, कम चीनी।",
            ),
        },
        DiseaseDiet {
            disease_id: "bp",
            recommendation: Text::new(
                "DASH diet. Low sodium, high potassium and magnesium.",
                "डैश आहार। कम सोडियम, उच्च पोटेशियम और मैग्नीशियम।",
            ),
        },
        DiseaseDiet {
            disease_id: "thyroid",
            recommendation: Text::new(
                "Include iodine and selenium rich foods. Limit goitrogens.",
                "आयोडीन और सेलेनियम युक्त खाद्य पदार्थ शामिल करें। गोइट्रोजन्स को सीमित करें।",
            ),
        },
        DiseaseDiet {
            disease_id: "obesity",
            recommendation: Text::new(
                "Calorie deficit. High protein, high fiber, lots of water.",
                "कैलोरी की कमी। उच्च प्रोटीन, उच्च फाइबर, बहुत सारा पानी।",
            ),
        },
    ],
};

#[cfg(test)]
#[path = "diet_test.rs"]
mod tests;
