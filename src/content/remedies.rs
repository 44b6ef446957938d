//! Ayurvedic home remedies and the key herbs table.

use serde::Serialize;

use crate::i18n::{Language, Lines, Text};

#[derive(Debug, Clone, Copy)]
pub struct Remedy {
    pub id: &'static str,
    pub title: Text,
    pub symptoms: Option<Text>,
    pub remedies: Lines,
    pub avoid: Option<Text>,
}

#[derive(Debug, Clone, Copy)]
pub struct Herb {
    pub name: Text,
    pub uses: Text,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemedyView {
    pub id: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    pub remedies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HerbView {
    pub name: String,
    pub uses: String,
}

impl Remedy {
    #[must_use]
    pub fn localize(&self, lang: Language) -> RemedyView {
        RemedyView {
            id: self.id,
            title: self.title.get(lang),
            symptoms: self.symptoms.map(|text| text.get(lang)),
            remedies: self.remedies.get(lang),
            avoid: self.avoid.map(|text| text.get(lang)),
        }
    }
}

impl Herb {
    #[must_use]
    pub fn localize(&self, lang: Language) -> HerbView {
        HerbView { name: self.name.get(lang), uses: self.uses.get(lang) }
    }
}

#[must_use]
pub fn remedies() -> &'static [Remedy] {
    REMEDIES
}

#[must_use]
pub fn herbs() -> &'static [Herb] {
    HERBS
}

// =============================================================================
// CATALOG
// =============================================================================

const fn remedy(id: &'static str, title: Text, remedies: Lines) -> Remedy {
    Remedy { id, title, symptoms: None, remedies, avoid: None }
}

static REMEDIES: &[Remedy] = &[
    Remedy {
        id: "1",
        title: Text::new("Cold & Cough", "सर्दी–जुकाम"),
        symptoms: Some(Text::new(
            "Symptoms: Sneezing, runny nose, sore throat",
            "लक्षण: छींक, नाक बहना, गले में खराश",
        )),
        remedies: Lines::new(
            &["Ginger + Honey: 1 tsp twice a day", "Tulsi Tea: Boil 5-6 leaves", "Turmeric Milk: 1 glass at night"],
            &["अदरक + शहद: 1 चम्मच दिन में 2 बार", "तुलसी की चाय: 5–6 पत्ते उबालकर", "हल्दी वाला दूध: रात में 1 गिलास"],
        ),
        avoid: Some(Text::new("Avoid: Cold water, Ice cream", "क्या न खाएं: ठंडा पानी, आइसक्रीम")),
    },
    remedy(
        "2",
        Text::new("Cough", "खांसी"),
        Lines::new(
            &["Black Pepper + Honey (½ tsp)", "Suck on Mulethi (Liquorice)", "Steam inhalation"],
            &["काली मिर्च + शहद (½ चम्मच)", "मुलेठी चूसना", "भाप लेना (Steam)"],
        ),
    ),
    Remedy {
        id: "3",
        title: Text::new("Fever", "बुखार"),
        symptoms: None,
        remedies: Lines::new(
            &["Tulsi + Ginger Decoction (Kadha)", "Keep drinking lukewarm water", "Rest the body"],
            &["तुलसी + अदरक का काढ़ा", "गुनगुना पानी पीते रहें", "शरीर को आराम दें"],
        ),
        avoid: Some(Text::new("Avoid: Fried & greasy food", "परहेज: तला-भुना भोजन")),
    },
    remedy(
        "4",
        Text::new("Headache", "सिरदर्द"),
        Lines::new(
            &["Apply ground cloves to the forehead", "Ginger tea", "10-15 minutes meditation"],
            &["लौंग पीसकर माथे पर लगाएं", "अदरक की चाय", "10–15 मिनट ध्यान"],
        ),
    ),
    remedy(
        "5",
        Text::new("Stomach Pain", "पेट दर्द"),
        Lines::new(
            &["Ajwain (Carom seeds) + Black salt", "Hing (Asafoetida) in lukewarm water", "Simple/Plain food"],
            &["अजवाइन + काला नमक", "हींग को गुनगुने पानी में", "सादा भोजन"],
        ),
    ),
    remedy(
        "6",
        Text::new("Gas & Indigestion", "गैस और अपच"),
        Lines::new(
            &["Chew Saunf (Fennel seeds)", "Jeera (Cumin) water", "Buttermilk (Chaas)"],
            &["सौंफ चबाएं", "जीरा पानी", "छाछ (मट्ठा)"],
        ),
    ),
    remedy(
        "7",
        Text::new("Constipation", "कब्ज"),
        Lines::new(
            &["Triphala powder (at night)", "Warm water in the morning", "Fruits and fiber-rich food"],
            &["त्रिफला चूर्ण (रात में)", "गर्म पानी सुबह", "फल और फाइबर"],
        ),
    ),
    remedy(
        "8",
        Text::new("Loose Motion", "दस्त"),
        Lines::new(
            &["Boiled pomegranate peel", "Curd + Mishri (Rock sugar)", "ORS"],
            &["अनार का छिलका उबालकर", "दही + मिश्री", "ORS"],
        ),
    ),
    remedy(
        "9",
        Text::new("Mouth Ulcer", "मुंह के छाले"),
        Lines::new(
            &["Apply Honey", "Coconut water", "Stop spicy food"],
            &["शहद लगाएं", "नारियल पानी", "मसालेदार खाना बंद"],
        ),
    ),
    remedy(
        "10",
        Text::new("Toothache", "दांत दर्द"),
        Lines::new(
            &["Press a clove on the tooth", "Salt + Mustard oil", "Neem twig (Datun)"],
            &["लौंग दबाएं", "नमक + सरसों का तेल", "नीम की दातून"],
        ),
    ),
    remedy(
        "11",
        Text::new("Skin Problems", "त्वचा रोग"),
        Lines::new(
            &["Turmeric + Neem paste", "Aloe Vera gel", "Wash with clean water"],
            &["हल्दी + नीम पेस्ट", "एलोवेरा जेल", "साफ पानी से धोना"],
        ),
    ),
    remedy(
        "12",
        Text::new("Hair Fall", "बालों का झड़ना"),
        Lines::new(
            &["Coconut oil + Amla", "Massage twice a week", "Protein-rich diet"],
            &["नारियल तेल + आंवला", "हफ्ते में 2 बार मालिश", "प्रोटीन युक्त आहार"],
        ),
    ),
    remedy(
        "13",
        Text::new("Weight Loss", "मोटापा"),
        Lines::new(
            &["Lukewarm lemon water", "Triphala", "Daily yoga/walking"],
            &["गुनगुना नींबू पानी", "त्रिफला", "रोज़ योग/चलना"],
        ),
    ),
    remedy(
        "14",
        Text::new("Weakness", "कमजोरी"),
        Lines::new(&["Ashwagandha", "Honey + Milk", "Adequate sleep"], &["अश्वगंधा", "शहद + दूध", "पर्याप्त नींद"]),
    ),
    remedy(
        "15",
        Text::new("Diabetes (Sugar Control)", "डायबिटीज"),
        Lines::new(
            &["Soaked Fenugreek (Methi) seeds", "Bitter gourd (Karela) juice", "Reduce sweets"],
            &["मेथी दाना भिगोकर", "करेला जूस", "मीठा कम करें"],
        ),
    ),
];

static HERBS: &[Herb] = &[
    Herb { name: Text::new("Ginger", "अदरक"), uses: Text::new("Digestion, Cold", "पाचन, सर्दी") },
    Herb { name: Text::new("Turmeric", "हल्दी"), uses: Text::new("Inflammation, Wounds", "सूजन, घाव") },
    Herb { name: Text::new("Tulsi", "तुलसी"), uses: Text::new("Immunity", "इम्युनिटी") },
    Herb { name: Text::new("Neem", "नीम"), uses: Text::new("Skin", "त्वचा") },
    Herb { name: Text::new("Amla", "आंवला"), uses: Text::new("Hair, Eyes", "बाल, आँखें") },
    Herb { name: Text::new("Saunf", "सौंफ"), uses: Text::new("Gas", "गैस") },
    Herb { name: Text::new("Ajwain", "अजवाइन"), uses: Text::new("Stomach Pain", "पेट दर्द") },
    Herb { name: Text::new("Cloves", "लौंग"), uses: Text::new("Toothache", "दांत दर्द") },
];

#[cfg(test)]
#[path = "remedies_test.rs"]
mod tests;
