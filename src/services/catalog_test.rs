use super::*;
use crate::state::test_helpers::MemoryStore;

fn option(id: &str, en: &str, hi: &str) -> DiseaseOption {
    DiseaseOption { id: id.into(), name_en: en.into(), name_hi: hi.into() }
}

#[tokio::test]
async fn no_store_uses_builtin_catalog() {
    let (source, choices) = disease_choices(None, Language::En).await;
    assert_eq!(source, OptionsSource::Builtin);
    assert_eq!(choices.len(), content::diseases().len());
    assert_eq!(choices[0], DiseaseChoice { id: "diabetes".into(), name: "Diabetes".into() });
}

#[tokio::test]
async fn store_options_take_precedence() {
    let store = MemoryStore::with_options(vec![option("migraine", "Migraine", "माइग्रेन")]);
    let (source, choices) = disease_choices(Some(&store), Language::Hi).await;
    assert_eq!(source, OptionsSource::Store);
    assert_eq!(choices, vec![DiseaseChoice { id: "migraine".into(), name: "माइग्रेन".into() }]);
}

#[tokio::test]
async fn empty_store_falls_back() {
    let store = MemoryStore::new();
    let (source, _) = disease_choices(Some(&store), Language::En).await;
    assert_eq!(source, OptionsSource::Builtin);
}

#[tokio::test]
async fn failing_store_falls_back() {
    let store = MemoryStore::failing();
    let (source, choices) = disease_choices(Some(&store), Language::Hi).await;
    assert_eq!(source, OptionsSource::Builtin);
    assert_eq!(choices[0].name, "मधुमेह");
}

#[test]
fn missing_hindi_name_uses_english() {
    let choice = DiseaseChoice::from_option(option("x", "Xeno", ""), Language::Hi);
    assert_eq!(choice.name, "Xeno");
}

#[tokio::test]
async fn seed_upserts_builtin_rows() {
    let store = MemoryStore::new();
    seed(&store).await.unwrap();
    assert_eq!(*store.seeded.lock().unwrap(), Some(content::diseases().len()));
}

#[tokio::test]
async fn seed_propagates_store_errors() {
    let store = MemoryStore::failing();
    assert!(seed(&store).await.is_err());
}
