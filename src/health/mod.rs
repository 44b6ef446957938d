//! Health arithmetic: BMI, BMR and daily water intake.

pub mod metrics;
