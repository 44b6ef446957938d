//! Body metrics formulas.
//!
//! DESIGN
//! ======
//! Every function takes raw metric inputs (cm, kg, years) and returns the
//! unrounded value. Display rounding is a separate step so classification
//! always sees the exact figure.

use serde::{Deserialize, Serialize};

/// Millilitres of water per kilogram of body weight per day.
pub const WATER_ML_PER_KG: f64 = 35.0;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("{field} must be a positive number")]
    NonPositive { field: &'static str },
}

fn positive(field: &'static str, value: f64) -> Result<f64, MetricsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MetricsError::NonPositive { field })
    }
}

// =============================================================================
// BMI
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            Self::Healthy
        } else if bmi < OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Body Mass Index: weight (kg) divided by height (m) squared.
///
/// # Errors
///
/// Returns [`MetricsError::NonPositive`] if either input is zero, negative
/// or not finite.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<f64, MetricsError> {
    let height_m = positive("height", height_cm)? / 100.0;
    let weight_kg = positive("weight", weight_kg)?;
    Ok(weight_kg / (height_m * height_m))
}

// =============================================================================
// BMR
// =============================================================================

/// Biological sex used by the Mifflin-St Jeor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    fn offset(self) -> f64 {
        match self {
            Self::Male => 5.0,
            Self::Female => -161.0,
        }
    }
}

/// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor).
///
/// # Errors
///
/// Returns [`MetricsError::NonPositive`] for a non-positive weight, height
/// or age.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> Result<f64, MetricsError> {
    let w = positive("weight", weight_kg)?;
    let h = positive("height", height_cm)?;
    let a = positive("age", age_years)?;
    Ok(10.0 * w + 6.25 * h - 5.0 * a + sex.offset())
}

// =============================================================================
// WATER
// =============================================================================

/// Daily water intake goal in millilitres.
///
/// # Errors
///
/// Returns [`MetricsError::NonPositive`] for a non-positive weight.
pub fn water_intake_ml(weight_kg: f64) -> Result<f64, MetricsError> {
    Ok(positive("weight", weight_kg)? * WATER_ML_PER_KG)
}

/// Daily water intake goal in litres, rounded to one decimal.
///
/// # Errors
///
/// Returns [`MetricsError::NonPositive`] for a non-positive weight.
pub fn water_intake_litres(weight_kg: f64) -> Result<f64, MetricsError> {
    // Round in decilitres so 2450 mL lands on 2.5 without float drift.
    let decilitres = (water_intake_ml(weight_kg)? / 100.0).round();
    Ok(decilitres / 10.0)
}

// =============================================================================
// ROUNDING
// =============================================================================

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round half away from zero to a whole number.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round0(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
