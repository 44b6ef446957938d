//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional store handle and the admin gate with its sessions.
//! Every field is cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::services::admin::{AdminGate, AdminSessions};
use crate::store::HealthStore;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no backend is configured. Submissions are then not persisted.
    pub store: Option<Arc<dyn HealthStore>>,
    pub admin: AdminGate,
    pub sessions: AdminSessions,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig, store: Option<Arc<dyn HealthStore>>) -> Self {
        Self {
            store,
            admin: AdminGate::new(config.admin_password.as_deref()),
            sessions: AdminSessions::new(Duration::from_secs(config.admin_session_ttl_secs)),
            cookie_secure: config.cookie_secure,
        }
    }

    #[must_use]
    pub fn store(&self) -> Option<&dyn HealthStore> {
        self.store.as_deref()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::*;
    use crate::config::StoreConfig;
    use crate::store::{CatalogRows, DiseaseOption, NewSubmission, StoreError, Submission};

    pub const TEST_PASSWORD: &str = "test-admin-password";

    /// In-memory `HealthStore`. `failing()` makes every call error.
    #[derive(Default)]
    pub struct MemoryStore {
        pub rows: Mutex<Vec<Submission>>,
        pub options: Vec<DiseaseOption>,
        pub seeded: Mutex<Option<usize>>,
        fail: bool,
    }

    impl MemoryStore {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        #[must_use]
        pub fn with_options(options: Vec<DiseaseOption>) -> Self {
            Self { options, ..Self::default() }
        }

        #[must_use]
        pub fn with_rows(rows: Vec<Submission>) -> Self {
            Self { rows: Mutex::new(rows), ..Self::default() }
        }

        pub fn count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Response { status: 503, body: "unavailable".into() });
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl HealthStore for MemoryStore {
        fn backend(&self) -> &'static str {
            "memory"
        }

        async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError> {
            self.check()?;
            let row = Submission::from_new(new, Uuid::new_v4(), OffsetDateTime::now_utc());
            self.rows.lock().unwrap().insert(0, row.clone());
            Ok(row)
        }

        async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn list_disease_options(&self) -> Result<Vec<DiseaseOption>, StoreError> {
            self.check()?;
            Ok(self.options.clone())
        }

        async fn seed_catalog(&self, catalog: &CatalogRows) -> Result<(), StoreError> {
            self.check()?;
            *self.seeded.lock().unwrap() = Some(catalog.diseases.len());
            Ok(())
        }
    }

    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            port: 0,
            store: StoreConfig::Disabled,
            admin_password: Some(TEST_PASSWORD.into()),
            admin_session_ttl_secs: 60,
            cookie_secure: false,
            seed_catalog: false,
            website_dir: "./website".into(),
        }
    }

    /// State with no store and the test admin password.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(&test_config(), None)
    }

    /// State backed by the given in-memory store.
    #[must_use]
    pub fn test_app_state_with_store(store: Arc<MemoryStore>) -> AppState {
        AppState::new(&test_config(), Some(store as Arc<dyn HealthStore>))
    }

    /// A stored submission with sensible defaults.
    #[must_use]
    pub fn dummy_submission(name: &str, disease: &str) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            full_name: name.into(),
            age: 35,
            gender: "Female".into(),
            height: 165.0,
            weight: 60.0,
            contact_number: "9876543210".into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            existing_disease: Some(disease.into()),
            symptoms: "mild headache".into(),
            lifestyle: "Active".into(),
            suggestions: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
