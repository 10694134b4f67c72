//! Repository traits for patients and questionnaires
//!
//! The triage core never reads or writes persisted state; it only receives
//! already-fetched values. These traits are the seam between the engine and
//! whatever backs it — the in-memory stores here, or a relational store in
//! a deployment.

pub mod memory;

pub use memory::{MemoryPatientStore, MemoryQuestionnaireStore};

use crate::error::Result;
use crate::models::patient::{Patient, PatientId, PatientUpdate};
use crate::models::questionnaire::Questionnaire;
use std::sync::Arc;

/// Read/write access to the patient registry
pub trait PatientStore {
    /// List all patients, ordered by name
    fn list(&self) -> Result<Vec<Arc<Patient>>>;

    /// Look up a patient by store-assigned id
    fn get(&self, id: PatientId) -> Result<Option<Arc<Patient>>>;

    /// Look up a patient by digit-only CPF
    fn get_by_cpf(&self, cpf: &str) -> Result<Option<Arc<Patient>>>;

    /// Insert a new patient, returning the assigned id.
    ///
    /// The `id` field of the argument is ignored; the store assigns one.
    fn insert(&mut self, patient: Patient) -> Result<PatientId>;

    /// Apply a mutable-field update to the patient with the given CPF.
    ///
    /// Returns `false` when no such patient exists.
    fn update_by_cpf(&mut self, cpf: &str, update: PatientUpdate) -> Result<bool>;

    /// Remove the patient with the given CPF.
    ///
    /// Returns `false` when no such patient exists.
    fn delete_by_cpf(&mut self, cpf: &str) -> Result<bool>;
}

/// Read/write access to stored questionnaires, one per patient
pub trait QuestionnaireStore {
    /// Fetch the questionnaire stored for a patient, if any
    fn get_by_patient(&self, id: PatientId) -> Result<Option<Arc<Questionnaire>>>;

    /// Insert or replace the questionnaire for a patient
    fn upsert(&mut self, id: PatientId, questionnaire: Questionnaire) -> Result<()>;

    /// Remove the questionnaire for a patient.
    ///
    /// Returns `false` when none was stored.
    fn delete_by_patient(&mut self, id: PatientId) -> Result<bool>;
}
