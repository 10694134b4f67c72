//! Domain models for the intake and triage engine
//!
//! These are the entities the engine works over: the patient registry
//! record, the stored questionnaire, and the value objects the triage core
//! consumes as plain function arguments.

pub mod patient;
pub mod questionnaire;
pub mod types;
pub mod vitals;

// Re-export commonly used types
pub use patient::{Patient, PatientId, PatientUpdate};
pub use questionnaire::Questionnaire;
pub use types::{BloodType, Gender, Priority, TriState, WeightClass};
pub use vitals::{PatientVitals, RiskFlags, VitalSigns};
