//! Health checkup routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::i18n::LangQuery;
use crate::services::catalog::{self, DiseaseChoice, OptionsSource};
use crate::services::checkup::{self, CheckupForm};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DiseaseOptionsResponse {
    pub source: OptionsSource,
    pub diseases: Vec<DiseaseChoice>,
}

/// `GET /api/checkup/diseases`: options for the existing-disease dropdown.
pub async fn disease_options(State(state): State<AppState>, Query(query): Query<LangQuery>) -> Json<DiseaseOptionsResponse> {
    let (source, diseases) = catalog::disease_choices(state.store(), query.lang).await;
    Json(DiseaseOptionsResponse { source, diseases })
}

/// `POST /api/checkup`: validate, store and answer with suggestions.
pub async fn submit(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(form): Json<CheckupForm>,
) -> Response {
    match checkup::submit(state.store(), &form, query.lang).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    }
}

#[cfg(test)]
#[path = "checkup_test.rs"]
mod tests;
