//! Health questionnaire entity model
//!
//! One questionnaire is stored per patient and overwritten on re-submission.
//! Both the automatic priority and the effective (possibly overridden)
//! priority are persisted so the operator can cross-check them later.

use crate::models::types::{Priority, TriState};
use crate::models::vitals::RiskFlags;
use serde::{Deserialize, Serialize};

/// Stored health questionnaire for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Comorbidity and habit flags
    pub flags: RiskFlags,
    /// Whether the patient takes regular medication
    pub medication: TriState,
    /// Which medication, free text
    pub medication_detail: Option<String>,
    /// Whether the patient has known allergies
    pub allergies: TriState,
    /// Which allergies, free text
    pub allergy_detail: Option<String>,
    /// Whether there is a relevant disease history
    pub disease_history: TriState,
    /// Disease history details, free text
    pub history_detail: Option<String>,
    /// Raw blood pressure reading as entered ("120/80")
    pub pressure: String,
    /// Body temperature (°C)
    pub temperature: Option<f64>,
    /// Free-text observations
    pub notes: Option<String>,
    /// Priority computed from the score breakdown
    pub auto_priority: Priority,
    /// Effective priority: the manual override when one was given,
    /// otherwise the automatic value
    pub priority: Priority,
    /// Patient age in whole years at submission
    pub age_years: Option<u32>,
    /// CRM of the attending physician, once assigned
    pub physician_crm: Option<String>,
}

impl Questionnaire {
    /// Whether the effective priority came from a manual override
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.priority != self.auto_priority
    }
}
