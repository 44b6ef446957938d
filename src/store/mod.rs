//! Persistence backends for submissions and catalog tables.
//!
//! ARCHITECTURE
//! ============
//! Handlers only see `Arc<dyn HealthStore>`. Two backends exist: direct
//! Postgres through sqlx (`PgStore`) and a hosted PostgREST endpoint through
//! reqwest (`RestStore`). Both speak to the same four tables: `diseases`,
//! `health_submissions`, `remedies` and `herbs`.
//!
//! TRADE-OFFS
//! ==========
//! There is no retry, dedup or caching. Every call is a single round trip
//! and failures bubble up as `StoreError` for the caller to log.

pub mod pg;
pub mod rest;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::content;

pub use pg::PgStore;
pub use rest::RestStore;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("http request failed: {0}")]
    Http(String),
    #[error("unexpected response ({status}): {body}")]
    Response { status: u16, body: String },
    #[error("decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// ROWS
// =============================================================================

/// Insert payload for `health_submissions`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSubmission {
    pub full_name: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub contact_number: String,
    pub email: String,
    pub existing_disease: String,
    pub symptoms: String,
    pub lifestyle: String,
    pub suggestions: serde_json::Value,
}

/// A stored submission. Mirrors the `health_submissions` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub full_name: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub contact_number: String,
    pub email: String,
    #[serde(default)]
    pub existing_disease: Option<String>,
    pub symptoms: String,
    pub lifestyle: String,
    #[serde(default)]
    pub suggestions: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Submission {
    #[must_use]
    pub fn from_new(new: &NewSubmission, id: Uuid, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            full_name: new.full_name.clone(),
            age: new.age,
            gender: new.gender.clone(),
            height: new.height,
            weight: new.weight,
            contact_number: new.contact_number.clone(),
            email: new.email.clone(),
            existing_disease: Some(new.existing_disease.clone()),
            symptoms: new.symptoms.clone(),
            lifestyle: new.lifestyle.clone(),
            suggestions: Some(new.suggestions.clone()),
            created_at,
        }
    }
}

/// `id, name_en, name_hi` projection of the `diseases` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseOption {
    pub id: String,
    pub name_en: String,
    pub name_hi: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseRow {
    pub id: &'static str,
    pub position: i32,
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub description_en: &'static str,
    pub description_hi: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemedyRow {
    pub id: &'static str,
    pub title_en: &'static str,
    pub title_hi: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HerbRow {
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub use_en: &'static str,
    pub use_hi: &'static str,
}

/// Catalog rows derived from the built-in content, used for seeding.
#[derive(Debug, Clone)]
pub struct CatalogRows {
    pub diseases: Vec<DiseaseRow>,
    pub remedies: Vec<RemedyRow>,
    pub herbs: Vec<HerbRow>,
}

impl CatalogRows {
    #[must_use]
    pub fn from_content() -> Self {
        Self {
            diseases: (0_i32..)
                .zip(content::diseases())
                .map(|(position, d)| DiseaseRow {
                    id: d.id,
                    position,
                    name_en: d.name.en,
                    name_hi: d.name.hi,
                    description_en: d.description.en,
                    description_hi: d.description.hi,
                })
                .collect(),
            remedies: content::remedies()
                .iter()
                .map(|r| RemedyRow { id: r.id, title_en: r.title.en, title_hi: r.title.hi })
                .collect(),
            herbs: content::herbs()
                .iter()
                .map(|h| HerbRow { name_en: h.name.en, name_hi: h.name.hi, use_en: h.uses.en, use_hi: h.uses.hi })
                .collect(),
        }
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Backend-neutral access to the remote tables. Enables mocking in tests.
#[async_trait::async_trait]
pub trait HealthStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Insert one submission and return the stored row.
    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError>;

    /// All submissions, newest first.
    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError>;

    /// Disease options for the checkup form.
    async fn list_disease_options(&self) -> Result<Vec<DiseaseOption>, StoreError>;

    /// Upsert the catalog tables.
    async fn seed_catalog(&self, catalog: &CatalogRows) -> Result<(), StoreError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
