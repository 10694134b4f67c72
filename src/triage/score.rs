//! Triage priority scoring
//!
//! Converts vital signs, age, BMI points and comorbidity flags into a
//! component score breakdown and a priority class. Scoring is best-effort:
//! a component whose input is missing or unparseable contributes zero
//! points, so the scorer always produces a priority. The worst case for a
//! patient with no usable data is an all-zero breakdown and "Not Urgent".

use crate::models::types::Priority;
use crate::models::vitals::{RiskFlags, VitalSigns};
use serde::{Deserialize, Serialize};

/// Per-component triage points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Blood pressure contribution
    pub pressure: u32,
    /// Temperature contribution
    pub temperature: u32,
    /// Age contribution
    pub age: u32,
    /// BMI contribution
    pub bmi: u32,
    /// Comorbidity flag contribution
    pub other: u32,
}

impl ScoreBreakdown {
    /// Sum of all components
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pressure + self.temperature + self.age + self.bmi + self.other
    }
}

/// Full result of one triage scoring pass
///
/// The automatic priority and the breakdown are always kept, even when a
/// manual override is present, so the operator can cross-check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Priority derived from the total score
    pub auto_priority: Priority,
    /// Operator-entered override, if any
    pub manual_override: Option<Priority>,
    /// Component score breakdown
    pub breakdown: ScoreBreakdown,
    /// Total score (sum of the breakdown)
    pub total: u32,
}

impl TriageResult {
    /// The priority to act on: the override when present, otherwise the
    /// automatic value
    #[must_use]
    pub const fn effective(&self) -> Priority {
        match self.manual_override {
            Some(manual) => manual,
            None => self.auto_priority,
        }
    }
}

/// Score one patient.
///
/// Every input is optional in some form; absence degrades that component
/// to zero points. This function never fails.
#[must_use]
pub fn score(
    vitals: &VitalSigns,
    age_years: Option<u32>,
    bmi_points: Option<u32>,
    flags: &RiskFlags,
    manual_override: Option<Priority>,
) -> TriageResult {
    let breakdown = ScoreBreakdown {
        pressure: vitals
            .pressure()
            .map_or(0, |(systolic, diastolic)| pressure_points(systolic, diastolic)),
        temperature: vitals.temperature.map_or(0, temperature_points),
        age: age_points(age_years),
        bmi: bmi_points.unwrap_or(0),
        other: risk_points(flags),
    };
    let total = breakdown.total();

    TriageResult {
        auto_priority: priority_for(total),
        manual_override,
        breakdown,
        total,
    }
}

/// Blood pressure points.
///
/// Rows are evaluated top to bottom and the first match wins; the ranges
/// are not disjoint by construction, so the order is load-bearing.
#[must_use]
pub const fn pressure_points(systolic: i32, diastolic: i32) -> u32 {
    if systolic < 90 || diastolic < 60 {
        2
    } else if systolic <= 120 && diastolic <= 80 {
        0
    } else if (systolic >= 121 && systolic <= 139) || (diastolic >= 81 && diastolic <= 89) {
        1
    } else if (systolic >= 140 && systolic <= 159) || (diastolic >= 90 && diastolic <= 99) {
        2
    } else if (systolic >= 160 && systolic <= 179) || (diastolic >= 100 && diastolic <= 109) {
        3
    } else {
        // systolic >= 180 or diastolic >= 110
        5
    }
}

/// Temperature points. Boundaries are inclusive on both the fever and
/// hypothermia side.
#[must_use]
pub fn temperature_points(temperature: f64) -> u32 {
    if temperature >= 39.0 {
        2
    } else if temperature >= 37.8 {
        1
    } else if temperature <= 35.5 {
        2
    } else {
        0
    }
}

/// Age points. The infant check runs first, so an infant scores exactly 1
/// and never stacks with the elderly bands. Unknown age contributes zero.
#[must_use]
pub const fn age_points(age_years: Option<u32>) -> u32 {
    match age_years {
        None => 0,
        Some(age) => {
            if age <= 1 {
                1
            } else if age >= 70 {
                2
            } else if age >= 60 {
                1
            } else {
                0
            }
        }
    }
}

/// Comorbidity flag points: smoker +1, hypertensive +2, diabetic +1.
/// The drinker flag is never scored.
#[must_use]
pub const fn risk_points(flags: &RiskFlags) -> u32 {
    let mut points = 0;
    if flags.smoker {
        points += 1;
    }
    if flags.hypertensive {
        points += 2;
    }
    if flags.diabetic {
        points += 1;
    }
    points
}

/// Map a total score to its automatic priority, highest threshold first.
#[must_use]
pub const fn priority_for(total: u32) -> Priority {
    if total >= 10 {
        Priority::Emergency
    } else if total >= 7 {
        Priority::VeryUrgent
    } else if total >= 4 {
        Priority::Urgent
    } else if total >= 2 {
        Priority::SlightlyUrgent
    } else {
        Priority::NotUrgent
    }
}
