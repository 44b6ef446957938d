//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON endpoints live under `/api`. Anything else falls through to the
//! static website directory, so the browser pages and the API share one
//! origin.

pub mod admin;
pub mod calculators;
pub mod checkup;
pub mod content;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/diseases", get(content::list_diseases))
        .route("/api/diseases/{id}", get(content::get_disease))
        .route("/api/diet", get(content::diet))
        .route("/api/remedies", get(content::remedies))
        .route("/api/herbs", get(content::herbs))
        .route("/api/yoga", get(content::yoga))
        .route("/api/meditation", get(content::meditation))
        .route("/api/calculators/bmi", get(calculators::bmi))
        .route("/api/calculators/bmr", get(calculators::bmr))
        .route("/api/calculators/water", get(calculators::water))
        .route("/api/checkup/diseases", get(checkup::disease_options))
        .route("/api/checkup", post(checkup::submit))
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", post(admin::logout))
        .route("/api/admin/submissions", get(admin::list_submissions))
        .route("/api/admin/submissions.csv", get(admin::export_csv))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus the static website as fallback.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let website = ServeDir::new(website_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(website)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
