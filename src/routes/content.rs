//! Read-only catalog routes: diseases, diet, remedies, herbs, yoga, meditation.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::config::parse_bool;
use crate::content::diet::Meal;
use crate::content::diseases::{DiseaseDetail, DiseaseSummary};
use crate::content::practice::{MeditationView, YogaRoutineView};
use crate::content::remedies::{HerbView, RemedyView};
use crate::content::{self, DietPreference};
use crate::i18n::{LangQuery, Language};

#[derive(Debug, Default, Deserialize)]
pub struct DiseaseSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub lang: Language,
}

/// `GET /api/diseases`: all diseases, or those whose name matches `q`.
pub async fn list_diseases(Query(query): Query<DiseaseSearchQuery>) -> Json<Vec<DiseaseSummary>> {
    let needle = query.q.as_deref().unwrap_or_default();
    Json(
        content::search_diseases(needle, query.lang)
            .into_iter()
            .map(|disease| disease.summary(query.lang))
            .collect(),
    )
}

/// `GET /api/diseases/{id}`: full detail for one disease.
pub async fn get_disease(Path(id): Path<String>, Query(query): Query<LangQuery>) -> Result<Json<DiseaseDetail>, StatusCode> {
    content::find_disease(&id)
        .map(|disease| Json(disease.detail(query.lang)))
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Debug, Default, Deserialize)]
pub struct DietQuery {
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub non_veg: Option<String>,
    #[serde(default)]
    pub disease: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DietResponse {
    pub non_veg: bool,
    pub healthy_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
    pub daily: Vec<Meal>,
    /// Present only when `disease` names a disease with diet advice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_recommendation: Option<String>,
}

/// `GET /api/diet`: food lists, daily plan and optional disease advice.
pub async fn diet(Query(query): Query<DietQuery>) -> Json<DietResponse> {
    let non_veg = query
        .non_veg
        .as_deref()
        .and_then(parse_bool)
        .unwrap_or(false);
    let plan = content::diet_plan();
    let disease_recommendation = query
        .disease
        .as_deref()
        .and_then(content::diet_for_disease)
        .map(|entry| entry.recommendation.get(query.lang));

    Json(DietResponse {
        non_veg,
        healthy_foods: plan.healthy_foods.get(query.lang),
        avoid_foods: plan.avoid_foods.get(query.lang),
        daily: content::daily_meals(DietPreference::from_non_veg(non_veg), query.lang),
        disease_recommendation,
    })
}

/// `GET /api/remedies`
pub async fn remedies(Query(query): Query<LangQuery>) -> Json<Vec<RemedyView>> {
    Json(content::remedies().iter().map(|r| r.localize(query.lang)).collect())
}

/// `GET /api/herbs`
pub async fn herbs(Query(query): Query<LangQuery>) -> Json<Vec<HerbView>> {
    Json(content::herbs().iter().map(|h| h.localize(query.lang)).collect())
}

/// `GET /api/yoga`
pub async fn yoga(Query(query): Query<LangQuery>) -> Json<Vec<YogaRoutineView>> {
    Json(content::yoga_routines().iter().map(|r| r.localize(query.lang)).collect())
}

/// `GET /api/meditation`
pub async fn meditation(Query(query): Query<LangQuery>) -> Json<Vec<MeditationView>> {
    Json(content::meditation_sessions().iter().map(|m| m.localize(query.lang)).collect())
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
