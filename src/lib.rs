//! A clinic intake and triage library: patient registry, health
//! questionnaire, BMI classification, priority scoring and waitlist
//! ordering.
//!
//! The triage core ([`triage`]) is pure and stateless; persistence is
//! reached only through the repository traits in [`store`], and the
//! [`intake`] service wires the two together.

pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod store;
pub mod triage;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::IntakeConfig;
pub use error::{Result, TriageError};
pub use models::patient::{Patient, PatientId, PatientUpdate};
pub use models::questionnaire::Questionnaire;
pub use models::types::{BloodType, Gender, Priority, TriState, WeightClass};
pub use models::vitals::{PatientVitals, RiskFlags, VitalSigns};

// The triage core
pub use triage::bmi::{BmiResult, classify, classify_raw};
pub use triage::score::{ScoreBreakdown, TriageResult, score};
pub use triage::waitlist::{WaitlistEntry, order};

// Orchestration and stores
pub use intake::{IntakeService, PatientRegistration, QuestionnaireForm};
pub use store::{
    MemoryPatientStore, MemoryQuestionnaireStore, PatientStore, QuestionnaireStore,
};
