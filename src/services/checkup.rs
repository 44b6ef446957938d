//! Health checkup: form validation, suggestion building and submission.
//!
//! ARCHITECTURE
//! ============
//! `validate` turns the raw form into a `ValidCheckup` or a map of
//! field-level messages. `build_suggestions` is pure and keeps both
//! languages so the stored record is language-neutral; `localize` picks one
//! side for the response. `submit` ties the steps together and writes the
//! record to the store when one is configured.
//!
//! ERROR HANDLING
//! ==============
//! A failed insert never hides the suggestions. It is logged and reported
//! as `saved: false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::{self, NO_DISEASE, OTHER_DISEASE};
use crate::health::metrics::{self, BmiCategory};
use crate::i18n::{Language, Lines, Text};
use crate::services::catalog;
use crate::store::{HealthStore, NewSubmission};

const MIN_NAME_CHARS: usize = 2;
const MIN_CONTACT_CHARS: usize = 10;
const MIN_SYMPTOM_CHARS: usize = 5;

const TIP_HYDRATION: Text = Text::new(
    "Stay hydrated: Drink 3-4 liters of water daily.",
    "हाइड्रेटेड रहें: रोजाना 3-4 लीटर पानी पिएं।",
);
const TIP_SLEEP: Text = Text::new(
    "Sleep: Ensure 7-8 hours of quality sleep.",
    "नींद: 7-8 घंटे की अच्छी नींद सुनिश्चित करें।",
);
const TIP_ACTIVITY_SEDENTARY: Text = Text::new(
    "Activity: Start with 20 mins of daily walking.",
    "गतिविधि: रोजाना 20 मिनट की सैर से शुरुआत करें।",
);
const TIP_ACTIVITY_ACTIVE: Text = Text::new(
    "Activity: Maintain your active lifestyle with strength training.",
    "गतिविधि: स्ट्रेंथ ट्रेनिंग के साथ अपनी सक्रिय जीवनशैली बनाए रखें।",
);
const BMI_HEALTHY_MESSAGE: Text = Text::new(
    "Great job! You are in the healthy weight range.",
    "बहुत बढ़िया! आप स्वस्थ वजन सीमा में हैं।",
);
const BMI_ADVICE_MESSAGE: Text = Text::new(
    "We recommend consulting a nutritionist for personalized weight management.",
    "व्यक्तिगत वजन प्रबंधन के लिए हम पोषण विशेषज्ञ से परामर्श करने की सलाह देते हैं।",
);
const DISCLAIMER: Text = Text::new(
    "Disclaimer: This is not a medical diagnosis. Please consult a professional.",
    "अस्वीकरण: यह चिकित्सा निदान नहीं है। कृपया किसी पेशेवर से सलाह लें।",
);

// =============================================================================
// FORM
// =============================================================================

/// A numeric form field. HTML forms post strings, API clients post numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

/// Raw checkup form as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckupForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<FormValue>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub height: Option<FormValue>,
    #[serde(default)]
    pub weight: Option<FormValue>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub existing_disease: Option<String>,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub lifestyle: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifestyle {
    #[default]
    Active,
    Sedentary,
}

impl Lifestyle {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "sedentary" => Some(Self::Sedentary),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Sedentary => "Sedentary",
        }
    }
}

/// A checkup that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCheckup {
    pub full_name: String,
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub contact_number: String,
    pub email: String,
    pub existing_disease: String,
    pub symptoms: String,
    pub lifestyle: Lifestyle,
}

/// Field name to message. Serializes as `{"errors": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn positive_number(value: Option<&FormValue>) -> Result<f64, bool> {
    match value {
        None => Err(true),
        Some(v) if v.is_blank() => Err(true),
        Some(v) => v
            .as_number()
            .filter(|n| n.is_finite() && *n > 0.0)
            .ok_or(false),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_age(value: f64) -> Option<i32> {
    (value.fract() == 0.0 && value <= f64::from(i32::MAX)).then_some(value as i32)
}

/// Check every field and collect all failures at once.
///
/// `is_known` decides which disease ids besides `none` and `other` are
/// accepted; callers pass the same option set the form was rendered from.
///
/// # Errors
///
/// Returns field-level messages for every invalid field.
pub fn validate(form: &CheckupForm, is_known: impl Fn(&str) -> bool) -> Result<ValidCheckup, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let full_name = form.full_name.trim().to_string();
    if full_name.chars().count() < MIN_NAME_CHARS {
        errors.add("full_name", "Name must be at least 2 characters");
    }

    let age = match positive_number(form.age.as_ref()) {
        Ok(n) => whole_age(n).unwrap_or_else(|| {
            errors.add("age", "Age must be a positive whole number");
            0
        }),
        Err(true) => {
            errors.add("age", "Age is required");
            0
        }
        Err(false) => {
            errors.add("age", "Age must be a positive whole number");
            0
        }
    };

    let gender = Gender::parse(&form.gender);
    if gender.is_none() {
        errors.add("gender", "Please select gender");
    }

    let height_cm = positive_number(form.height.as_ref()).unwrap_or_else(|missing| {
        errors.add("height", if missing { "Height is required" } else { "Height must be a positive number" });
        0.0
    });
    let weight_kg = positive_number(form.weight.as_ref()).unwrap_or_else(|missing| {
        errors.add("weight", if missing { "Weight is required" } else { "Weight must be a positive number" });
        0.0
    });

    let contact_number = form.contact_number.trim().to_string();
    if contact_number.chars().count() < MIN_CONTACT_CHARS {
        errors.add("contact_number", "Valid contact number required");
    }

    let email = form.email.trim().to_string();
    if !is_valid_email(&email) {
        errors.add("email", "Invalid email address");
    }

    let existing_disease = form
        .existing_disease
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(NO_DISEASE)
        .to_string();
    if existing_disease != NO_DISEASE && existing_disease != OTHER_DISEASE && !is_known(&existing_disease) {
        errors.add("existing_disease", "Please select a valid condition");
    }

    let symptoms = form.symptoms.trim().to_string();
    if symptoms.chars().count() < MIN_SYMPTOM_CHARS {
        errors.add("symptoms", "Please describe your symptoms");
    }

    let lifestyle = match form.lifestyle.as_deref().map(str::trim) {
        None | Some("") => Some(Lifestyle::default()),
        Some(raw) => Lifestyle::parse(raw),
    };
    if lifestyle.is_none() {
        errors.add("lifestyle", "Please select lifestyle");
    }

    match (gender, lifestyle) {
        (Some(gender), Some(lifestyle)) if errors.is_empty() => Ok(ValidCheckup {
            full_name,
            age,
            gender,
            height_cm,
            weight_kg,
            contact_number,
            email,
            existing_disease,
            symptoms,
            lifestyle,
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseAdvice {
    pub id: &'static str,
    pub name: Text,
    pub yoga: Lines,
}

/// Language-neutral suggestions. This is what gets stored.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    pub bmi: f64,
    pub bmi_status: BmiCategory,
    pub disease: Option<DiseaseAdvice>,
    pub diet: Option<Text>,
    pub general: Vec<Text>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedAdvice {
    pub id: &'static str,
    pub name: String,
    pub yoga: Vec<String>,
}

/// Suggestions in one language, as returned to the browser.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedSuggestions {
    pub lang: Language,
    pub bmi: f64,
    pub bmi_status: BmiCategory,
    pub bmi_message: String,
    pub disease: Option<LocalizedAdvice>,
    pub diet: Option<String>,
    pub general: Vec<String>,
    pub disclaimer: String,
}

/// Build suggestions from a validated checkup.
#[must_use]
pub fn build_suggestions(checkup: &ValidCheckup) -> Suggestions {
    // Validation guarantees positive inputs.
    let raw_bmi = metrics::bmi(checkup.height_cm, checkup.weight_kg).unwrap_or_default();

    let disease = content::find_disease(&checkup.existing_disease)
        .map(|d| DiseaseAdvice { id: d.id, name: d.name, yoga: d.yoga });
    let diet = content::diet_for_disease(&checkup.existing_disease).map(|d| d.recommendation);
    let activity = match checkup.lifestyle {
        Lifestyle::Sedentary => TIP_ACTIVITY_SEDENTARY,
        Lifestyle::Active => TIP_ACTIVITY_ACTIVE,
    };

    Suggestions {
        bmi: metrics::round1(raw_bmi),
        bmi_status: BmiCategory::classify(raw_bmi),
        disease,
        diet,
        general: vec![TIP_HYDRATION, TIP_SLEEP, activity],
    }
}

impl Suggestions {
    #[must_use]
    pub fn localize(&self, lang: Language) -> LocalizedSuggestions {
        let message = if self.bmi_status == BmiCategory::Healthy { BMI_HEALTHY_MESSAGE } else { BMI_ADVICE_MESSAGE };
        LocalizedSuggestions {
            lang,
            bmi: self.bmi,
            bmi_status: self.bmi_status,
            bmi_message: message.get(lang),
            disease: self
                .disease
                .as_ref()
                .map(|d| LocalizedAdvice { id: d.id, name: d.name.get(lang), yoga: d.yoga.get(lang) }),
            diet: self.diet.map(|d| d.get(lang)),
            general: self.general.iter().map(|tip| tip.get(lang)).collect(),
            disclaimer: DISCLAIMER.get(lang),
        }
    }
}

// =============================================================================
// SUBMIT
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CheckupOutcome {
    pub saved: bool,
    pub suggestions: LocalizedSuggestions,
}

fn new_submission(checkup: &ValidCheckup, suggestions: &Suggestions) -> NewSubmission {
    NewSubmission {
        full_name: checkup.full_name.clone(),
        age: checkup.age,
        gender: checkup.gender.as_str().to_string(),
        height: checkup.height_cm,
        weight: checkup.weight_kg,
        contact_number: checkup.contact_number.clone(),
        email: checkup.email.clone(),
        existing_disease: checkup.existing_disease.clone(),
        symptoms: checkup.symptoms.clone(),
        lifestyle: checkup.lifestyle.as_str().to_string(),
        suggestions: serde_json::to_value(suggestions).unwrap_or_default(),
    }
}

/// Validate, build suggestions and persist the submission.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when the form is invalid. Store failures are
/// logged and reported through `saved`.
pub async fn submit(
    store: Option<&dyn HealthStore>,
    form: &CheckupForm,
    lang: Language,
) -> Result<CheckupOutcome, ValidationErrors> {
    let (_, choices) = catalog::disease_choices(store, lang).await;
    let checkup = validate(form, |id| choices.iter().any(|c| c.id == id))?;
    let suggestions = build_suggestions(&checkup);

    let saved = match store {
        Some(store) => match store
            .insert_submission(&new_submission(&checkup, &suggestions))
            .await
        {
            Ok(row) => {
                tracing::info!(
                    id = %row.id,
                    backend = store.backend(),
                    bmi_status = suggestions.bmi_status.as_str(),
                    lang = lang.as_str(),
                    "checkup submission stored"
                );
                true
            }
            Err(e) => {
                tracing::error!(error = %e, backend = store.backend(), "failed to store checkup submission");
                false
            }
        },
        None => {
            tracing::warn!("no store configured; checkup submission not persisted");
            false
        }
    };

    Ok(CheckupOutcome { saved, suggestions: suggestions.localize(lang) })
}

#[cfg(test)]
#[path = "checkup_test.rs"]
mod tests;
