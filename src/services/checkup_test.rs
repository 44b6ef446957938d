use std::sync::Arc;

use super::*;
use crate::state::test_helpers::MemoryStore;
use crate::store::DiseaseOption;

fn valid_form() -> CheckupForm {
    CheckupForm {
        full_name: "Asha Verma".into(),
        age: Some(FormValue::Text("42".into())),
        gender: "Female".into(),
        height: Some(FormValue::Number(160.0)),
        weight: Some(FormValue::Text("62".into())),
        contact_number: "9876543210".into(),
        email: "asha@example.com".into(),
        existing_disease: Some("diabetes".into()),
        symptoms: "Frequent thirst".into(),
        lifestyle: Some("Sedentary".into()),
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn valid_form_passes() {
    let checkup = validate(&valid_form(), content::is_known_disease).unwrap();
    assert_eq!(checkup.age, 42);
    assert_eq!(checkup.gender, Gender::Female);
    assert!((checkup.weight_kg - 62.0).abs() < f64::EPSILON);
    assert_eq!(checkup.lifestyle, Lifestyle::Sedentary);
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = validate(&CheckupForm::default(), content::is_known_disease).unwrap_err();
    assert_eq!(errors.errors.get("full_name").copied(), Some("Name must be at least 2 characters"));
    assert_eq!(errors.errors.get("age").copied(), Some("Age is required"));
    assert_eq!(errors.errors.get("gender").copied(), Some("Please select gender"));
    assert_eq!(errors.errors.get("height").copied(), Some("Height is required"));
    assert_eq!(errors.errors.get("weight").copied(), Some("Weight is required"));
    assert_eq!(errors.errors.get("contact_number").copied(), Some("Valid contact number required"));
    assert_eq!(errors.errors.get("email").copied(), Some("Invalid email address"));
    assert_eq!(errors.errors.get("symptoms").copied(), Some("Please describe your symptoms"));
    assert_eq!(errors.errors.get("lifestyle").copied(), None);
    assert_eq!(errors.errors.get("existing_disease").copied(), None);
}

#[test]
fn defaults_disease_and_lifestyle() {
    let mut form = valid_form();
    form.existing_disease = None;
    form.lifestyle = None;
    let checkup = validate(&form, content::is_known_disease).unwrap();
    assert_eq!(checkup.existing_disease, "none");
    assert_eq!(checkup.lifestyle, Lifestyle::Active);
}

#[test]
fn other_disease_is_accepted() {
    let mut form = valid_form();
    form.existing_disease = Some("other".into());
    assert_eq!(validate(&form, content::is_known_disease).unwrap().existing_disease, "other");
}

#[test]
fn unknown_disease_is_rejected() {
    let mut form = valid_form();
    form.existing_disease = Some("scurvy".into());
    let errors = validate(&form, content::is_known_disease).unwrap_err();
    assert!(errors.errors.get("existing_disease").copied().is_some());
}

#[test]
fn fractional_or_negative_age_is_rejected() {
    let mut form = valid_form();
    form.age = Some(FormValue::Number(42.5));
    assert_eq!(validate(&form, content::is_known_disease).unwrap_err().errors.get("age").copied(), Some("Age must be a positive whole number"));

    form.age = Some(FormValue::Text("-3".into()));
    assert_eq!(validate(&form, content::is_known_disease).unwrap_err().errors.get("age").copied(), Some("Age must be a positive whole number"));
}

#[test]
fn non_numeric_height_is_rejected() {
    let mut form = valid_form();
    form.height = Some(FormValue::Text("tall".into()));
    assert_eq!(validate(&form, content::is_known_disease).unwrap_err().errors.get("height").copied(), Some("Height must be a positive number"));
}

#[test]
fn unknown_lifestyle_is_rejected() {
    let mut form = valid_form();
    form.lifestyle = Some("Couch".into());
    assert_eq!(validate(&form, content::is_known_disease).unwrap_err().errors.get("lifestyle").copied(), Some("Please select lifestyle"));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a b@c.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a@b..co"));
}

#[test]
fn form_accepts_numbers_or_strings() {
    let form: CheckupForm = serde_json::from_value(serde_json::json!({
        "full_name": "Ravi",
        "age": 30,
        "height": "175",
        "weight": 80.5,
    }))
    .unwrap();
    assert_eq!(form.age, Some(FormValue::Number(30.0)));
    assert_eq!(form.height, Some(FormValue::Text("175".into())));
}

#[test]
fn errors_serialize_under_errors_key() {
    let errors = validate(&CheckupForm::default(), content::is_known_disease).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json["errors"]["gender"], "Please select gender");
}

// =============================================================================
// suggestions
// =============================================================================

#[test]
fn suggestions_for_diabetes() {
    let suggestions = build_suggestions(&validate(&valid_form(), content::is_known_disease).unwrap());
    // 62 / 1.6^2 = 24.21875
    assert!((suggestions.bmi - 24.2).abs() < f64::EPSILON);
    assert_eq!(suggestions.bmi_status, BmiCategory::Healthy);
    assert_eq!(suggestions.disease.as_ref().map(|d| d.id), Some("diabetes"));
    assert!(suggestions.diet.is_some());
    assert_eq!(suggestions.general.len(), 3);
    assert_eq!(suggestions.general[2].en, "Activity: Start with 20 mins of daily walking.");
}

#[test]
fn suggestions_without_disease() {
    let mut form = valid_form();
    form.existing_disease = Some("none".into());
    form.lifestyle = Some("Active".into());
    let suggestions = build_suggestions(&validate(&form, content::is_known_disease).unwrap());
    assert!(suggestions.disease.is_none());
    assert!(suggestions.diet.is_none());
    assert_eq!(suggestions.general[2].en, "Activity: Maintain your active lifestyle with strength training.");
}

#[test]
fn localize_adds_messages() {
    let mut form = valid_form();
    form.weight = Some(FormValue::Number(90.0));
    let suggestions = build_suggestions(&validate(&form, content::is_known_disease).unwrap());
    assert_eq!(suggestions.bmi_status, BmiCategory::Obese);

    let en = suggestions.localize(Language::En);
    assert_eq!(en.bmi_message, "We recommend consulting a nutritionist for personalized weight management.");
    assert_eq!(en.disclaimer, "Disclaimer: This is not a medical diagnosis. Please consult a professional.");
    assert_eq!(en.disease.as_ref().map(|d| d.name.as_str()), Some("Diabetes"));

    let hi = suggestions.localize(Language::Hi);
    assert_eq!(hi.disclaimer, "अस्वीकरण: यह चिकित्सा निदान नहीं है। कृपया किसी पेशेवर से सलाह लें।");
    assert_eq!(hi.general[0], "हाइड्रेटेड रहें: रोजाना 3-4 लीटर पानी पिएं।");
}

#[test]
fn healthy_bmi_message() {
    let localized = build_suggestions(&validate(&valid_form(), content::is_known_disease).unwrap()).localize(Language::En);
    assert_eq!(localized.bmi_message, "Great job! You are in the healthy weight range.");
}

#[test]
fn stored_suggestions_keep_both_languages() {
    let suggestions = build_suggestions(&validate(&valid_form(), content::is_known_disease).unwrap());
    let json = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(json["bmi_status"], "Healthy");
    assert_eq!(json["disease"]["name"]["en"], "Diabetes");
    assert_eq!(json["disease"]["name"]["hi"], "मधुमेह");
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn submit_stores_record() {
    let store = Arc::new(MemoryStore::new());
    let outcome = submit(Some(store.as_ref()), &valid_form(), Language::En)
        .await
        .unwrap();
    assert!(outcome.saved);
    assert_eq!(store.count(), 1);

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows[0].gender, "Female");
    assert_eq!(rows[0].lifestyle, "Sedentary");
    assert_eq!(rows[0].existing_disease.as_deref(), Some("diabetes"));
    assert!(rows[0].suggestions.is_some());
}

#[tokio::test]
async fn submit_without_store_still_returns_suggestions() {
    let outcome = submit(None, &valid_form(), Language::Hi).await.unwrap();
    assert!(!outcome.saved);
    assert_eq!(outcome.suggestions.lang, Language::Hi);
}

#[tokio::test]
async fn submit_survives_store_failure() {
    let store = MemoryStore::failing();
    let outcome = submit(Some(&store), &valid_form(), Language::En)
        .await
        .unwrap();
    assert!(!outcome.saved);
    assert_eq!(outcome.suggestions.bmi_status, BmiCategory::Healthy);
}

#[tokio::test]
async fn submit_rejects_invalid_form_without_writing() {
    let store = MemoryStore::new();
    let errors = submit(Some(&store), &CheckupForm::default(), Language::En)
        .await
        .unwrap_err();
    assert!(!errors.is_empty());
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn submit_accepts_disease_offered_by_store() {
    let store = MemoryStore::with_options(vec![DiseaseOption {
        id: "migraine".into(),
        name_en: "Migraine".into(),
        name_hi: "माइग्रेन".into(),
    }]);
    let (_, choices) = catalog::disease_choices(Some(&store), Language::En).await;
    let mut form = valid_form();
    form.existing_disease = Some(choices[0].id.clone());

    let outcome = submit(Some(&store), &form, Language::En).await.unwrap();
    assert!(outcome.saved);
    assert!(outcome.suggestions.disease.is_none());
    let rows = store.rows.lock().unwrap();
    assert_eq!(rows[0].existing_disease.as_deref(), Some("migraine"));
}

#[tokio::test]
async fn submit_rejects_disease_missing_from_store_options() {
    let store = MemoryStore::with_options(vec![DiseaseOption {
        id: "migraine".into(),
        name_en: "Migraine".into(),
        name_hi: "माइग्रेन".into(),
    }]);
    let mut form = valid_form();
    form.existing_disease = Some("scurvy".into());
    let errors = submit(Some(&store), &form, Language::En).await.unwrap_err();
    assert_eq!(errors.errors.get("existing_disease").copied(), Some("Please select a valid condition"));
    assert_eq!(store.count(), 0);
}
