//! Static bilingual catalogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the informational pages show lives here as `static` data:
//! diseases, diet plans, home remedies, herbs, yoga routines and meditation
//! sessions. Lookups are linear scans; the arrays are tiny. The checkup flow
//! reads the same catalogs to build suggestions, and the store seeds its
//! catalog tables from them.

pub mod diet;
pub mod diseases;
pub mod practice;
pub mod remedies;

pub use diet::{DietPreference, daily_meals, diet_for_disease, diet_plan};
pub use diseases::{diseases, find_disease, is_known_disease, search_diseases};
pub use practice::{meditation_sessions, yoga_routines};
pub use remedies::{herbs, remedies};

/// Sentinel disease id meaning "no existing disease".
pub const NO_DISEASE: &str = "none";
/// Sentinel disease id for conditions outside the catalog.
pub const OTHER_DISEASE: &str = "other";
