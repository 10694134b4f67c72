//! Vital sign and risk flag value objects
//!
//! Inputs arrive form-shaped and possibly incomplete. Parsing here is
//! best-effort: a reading that cannot be understood becomes an absent
//! value, never an error, so triage can always proceed.

use crate::triage::bmi::{self, BmiResult};
use serde::{Deserialize, Serialize};

/// A single set of vital sign measurements
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Systolic blood pressure (mmHg)
    pub systolic: Option<i32>,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: Option<i32>,
    /// Body temperature (°C)
    pub temperature: Option<f64>,
}

impl VitalSigns {
    /// Create vital signs from already-parsed values
    #[must_use]
    pub const fn new(
        systolic: Option<i32>,
        diastolic: Option<i32>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            systolic,
            diastolic,
            temperature,
        }
    }

    /// Build vital signs from a raw `"systolic/diastolic"` reading.
    ///
    /// An unparseable reading leaves both pressure values absent; it is
    /// never an error.
    #[must_use]
    pub fn from_reading(pressure: &str, temperature: Option<f64>) -> Self {
        match parse_pressure(pressure) {
            Some((systolic, diastolic)) => Self::new(Some(systolic), Some(diastolic), temperature),
            None => Self::new(None, None, temperature),
        }
    }

    /// Get the pressure pair, if both halves are present
    #[must_use]
    pub const fn pressure(&self) -> Option<(i32, i32)> {
        match (self.systolic, self.diastolic) {
            (Some(s), Some(d)) => Some((s, d)),
            _ => None,
        }
    }
}

/// Parse a `"systolic/diastolic"` blood pressure reading
#[must_use]
pub fn parse_pressure(raw: &str) -> Option<(i32, i32)> {
    let (sys, dia) = raw.trim().split_once('/')?;
    let systolic = sys.trim().parse::<i32>().ok()?;
    let diastolic = dia.trim().parse::<i32>().ok()?;
    Some((systolic, diastolic))
}

/// Comorbidity and habit flags collected by the questionnaire
///
/// The drinker flag is collected for display only and never contributes
/// to the triage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskFlags {
    /// Smoker
    pub smoker: bool,
    /// Alcohol use (display only, not scored)
    pub drinker: bool,
    /// Diagnosed hypertension
    pub hypertensive: bool,
    /// Diagnosed diabetes
    pub diabetic: bool,
}

impl RiskFlags {
    /// Create a flag set
    #[must_use]
    pub const fn new(smoker: bool, drinker: bool, hypertensive: bool, diabetic: bool) -> Self {
        Self {
            smoker,
            drinker,
            hypertensive,
            diabetic,
        }
    }
}

/// Physical measurements of a patient relevant to triage
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientVitals {
    /// Age in whole years, if the birth date is known
    pub age_years: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
}

impl PatientVitals {
    /// Create a measurement set
    #[must_use]
    pub const fn new(age_years: Option<u32>, height_cm: Option<f64>, weight_kg: Option<f64>) -> Self {
        Self {
            age_years,
            height_cm,
            weight_kg,
        }
    }

    /// Classify the BMI of these measurements, when both are usable
    #[must_use]
    pub fn bmi(&self) -> Option<BmiResult> {
        bmi::classify(self.height_cm?, self.weight_kg?)
    }
}
