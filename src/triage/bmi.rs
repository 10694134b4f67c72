//! BMI classification
//!
//! Pure leaf of the triage core: height and weight in, band and point
//! contribution out. When either measurement is missing or unusable the
//! BMI is undefined (`None`), which the scorer treats as a zero-point
//! contribution. Undefined is never collapsed to 0.0.

use crate::models::types::WeightClass;
use serde::{Deserialize, Serialize};

/// Result of a BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, rounded to one decimal
    pub value: f64,
    /// Weight classification band
    pub class: WeightClass,
    /// Triage point contribution (0-3)
    pub points: u32,
}

/// Classify a BMI from height in centimeters and weight in kilograms.
///
/// Returns `None` when either measurement is non-positive or non-finite.
/// The value is rounded to one decimal, half away from zero, and the band
/// is chosen on the rounded value.
#[must_use]
pub fn classify(height_cm: f64, weight_kg: f64) -> Option<BmiResult> {
    let height_m = height_cm / 100.0;
    if !(height_m > 0.0) || !(weight_kg > 0.0) || !height_m.is_finite() || !weight_kg.is_finite() {
        return None;
    }

    let value = round_one_decimal(weight_kg / (height_m * height_m));
    let class = band(value);
    Some(BmiResult {
        value,
        class,
        points: class.points(),
    })
}

/// Classify a BMI from form-shaped height and weight strings.
///
/// Unparseable input yields `None`, same as a missing measurement.
#[must_use]
pub fn classify_raw(height: &str, weight: &str) -> Option<BmiResult> {
    let height_cm = height.trim().parse::<f64>().ok()?;
    let weight_kg = weight.trim().parse::<f64>().ok()?;
    classify(height_cm, weight_kg)
}

/// Band thresholds, lower bound inclusive.
///
/// The 24.9 Normal/Overweight boundary is intentional and must not be
/// corrected to the textbook 25.0.
fn band(bmi: f64) -> WeightClass {
    if bmi < 18.5 {
        WeightClass::Underweight
    } else if bmi < 24.9 {
        WeightClass::NormalWeight
    } else if bmi < 30.0 {
        WeightClass::Overweight
    } else if bmi < 35.0 {
        WeightClass::ObesityClassI
    } else if bmi < 40.0 {
        WeightClass::ObesityClassII
    } else {
        WeightClass::ObesityClassIII
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
