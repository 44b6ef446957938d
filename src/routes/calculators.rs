//! Body metric calculator routes.
//!
//! Inputs arrive as query strings and are parsed by hand so every failure
//! produces a JSON `{"error": ...}` body with status 400.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::health::metrics::{self, BmiCategory, MetricsError, Sex};

#[derive(Debug)]
pub struct CalculatorError(String);

impl From<MetricsError> for CalculatorError {
    fn from(err: MetricsError) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": self.0 }))).into_response()
    }
}

fn number(field: &'static str, raw: Option<&str>) -> Result<f64, CalculatorError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        return Err(CalculatorError(format!("{field} is required")));
    };
    raw.parse::<f64>()
        .map_err(|_| CalculatorError(format!("{field} must be a number")))
}

fn sex(raw: Option<&str>) -> Result<Sex, CalculatorError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("male") => Ok(Sex::Male),
        Some("female") => Ok(Sex::Female),
        None | Some("") => Err(CalculatorError("sex is required".into())),
        Some(_) => Err(CalculatorError("sex must be male or female".into())),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BodyQuery {
    pub height_cm: Option<String>,
    pub weight_kg: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Serialize)]
pub struct BmrResponse {
    pub bmr_kcal: i64,
}

#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub litres: f64,
    pub millilitres: i64,
}

/// `GET /api/calculators/bmi`
pub async fn bmi(Query(query): Query<BodyQuery>) -> Result<Json<BmiResponse>, CalculatorError> {
    let height = number("height", query.height_cm.as_deref())?;
    let weight = number("weight", query.weight_kg.as_deref())?;
    let value = metrics::bmi(height, weight)?;
    Ok(Json(BmiResponse { bmi: metrics::round1(value), category: BmiCategory::classify(value) }))
}

/// `GET /api/calculators/bmr`
pub async fn bmr(Query(query): Query<BodyQuery>) -> Result<Json<BmrResponse>, CalculatorError> {
    let height = number("height", query.height_cm.as_deref())?;
    let weight = number("weight", query.weight_kg.as_deref())?;
    let age = number("age", query.age.as_deref())?;
    let sex = sex(query.sex.as_deref())?;
    let value = metrics::bmr(weight, height, age, sex)?;
    Ok(Json(BmrResponse { bmr_kcal: metrics::round0(value) }))
}

/// `GET /api/calculators/water`
pub async fn water(Query(query): Query<BodyQuery>) -> Result<Json<WaterResponse>, CalculatorError> {
    let weight = number("weight", query.weight_kg.as_deref())?;
    Ok(Json(WaterResponse {
        litres: metrics::water_intake_litres(weight)?,
        millilitres: metrics::round0(metrics::water_intake_ml(weight)?),
    }))
}

#[cfg(test)]
#[path = "calculators_test.rs"]
mod tests;
