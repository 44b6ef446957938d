//! Catalog reads and seeding against the store.

use serde::Serialize;

use crate::content;
use crate::i18n::Language;
use crate::store::{CatalogRows, DiseaseOption, HealthStore, StoreError};

/// Where the disease options came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsSource {
    Store,
    Builtin,
}

/// One entry of the checkup form's disease dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseChoice {
    pub id: String,
    pub name: String,
}

impl DiseaseChoice {
    fn from_option(option: DiseaseOption, lang: Language) -> Self {
        let name = match lang {
            Language::Hi if !option.name_hi.is_empty() => option.name_hi,
            _ => option.name_en,
        };
        Self { id: option.id, name }
    }
}

fn builtin_options() -> Vec<DiseaseOption> {
    content::diseases()
        .iter()
        .map(|d| DiseaseOption { id: d.id.to_string(), name_en: d.name.en.to_string(), name_hi: d.name.hi.to_string() })
        .collect()
}

/// Disease options from the store, or the built-in catalog when the store
/// is missing, empty or failing.
pub async fn disease_choices(store: Option<&dyn HealthStore>, lang: Language) -> (OptionsSource, Vec<DiseaseChoice>) {
    let from_store = match store {
        Some(store) => match store.list_disease_options().await {
            Ok(options) if !options.is_empty() => Some(options),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, backend = store.backend(), "disease options unavailable; using built-in catalog");
                None
            }
        },
        None => None,
    };

    let (source, options) = match from_store {
        Some(options) => (OptionsSource::Store, options),
        None => (OptionsSource::Builtin, builtin_options()),
    };
    (source, options.into_iter().map(|o| DiseaseChoice::from_option(o, lang)).collect())
}

/// Upsert the built-in catalog into the store.
///
/// # Errors
///
/// Returns the store error if any upsert fails.
pub async fn seed(store: &dyn HealthStore) -> Result<(), StoreError> {
    let rows = CatalogRows::from_content();
    store.seed_catalog(&rows).await?;
    tracing::info!(
        backend = store.backend(),
        diseases = rows.diseases.len(),
        remedies = rows.remedies.len(),
        herbs = rows.herbs.len(),
        "catalog seeded"
    );
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
