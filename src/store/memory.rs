//! In-memory store implementations
//!
//! Hash-map-backed stores for library use and tests. Ids are assigned from
//! a monotone counter, CPF lookups go through a secondary index, and
//! listings are sorted by name to give callers a deterministic order.

use crate::error::{Result, TriageError};
use crate::models::patient::{Patient, PatientId, PatientUpdate};
use crate::models::questionnaire::Questionnaire;
use crate::store::{PatientStore, QuestionnaireStore};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// In-memory patient registry
#[derive(Debug, Default)]
pub struct MemoryPatientStore {
    patients: FxHashMap<PatientId, Arc<Patient>>,
    by_cpf: FxHashMap<String, PatientId>,
    next_id: PatientId,
}

impl MemoryPatientStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered patients
    #[must_use]
    pub fn count(&self) -> usize {
        self.patients.len()
    }
}

impl PatientStore for MemoryPatientStore {
    fn list(&self) -> Result<Vec<Arc<Patient>>> {
        let mut all: Vec<Arc<Patient>> = self.patients.values().cloned().collect();
        all.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.cpf.cmp(&b.cpf))
        });
        Ok(all)
    }

    fn get(&self, id: PatientId) -> Result<Option<Arc<Patient>>> {
        Ok(self.patients.get(&id).cloned())
    }

    fn get_by_cpf(&self, cpf: &str) -> Result<Option<Arc<Patient>>> {
        Ok(self
            .by_cpf
            .get(cpf)
            .and_then(|id| self.patients.get(id))
            .cloned())
    }

    fn insert(&mut self, mut patient: Patient) -> Result<PatientId> {
        if self.by_cpf.contains_key(&patient.cpf) {
            return Err(TriageError::DuplicatePatient(patient.cpf));
        }
        self.next_id += 1;
        let id = self.next_id;
        patient.id = id;
        self.by_cpf.insert(patient.cpf.clone(), id);
        self.patients.insert(id, Arc::new(patient));
        Ok(id)
    }

    fn update_by_cpf(&mut self, cpf: &str, update: PatientUpdate) -> Result<bool> {
        let Some(&id) = self.by_cpf.get(cpf) else {
            return Ok(false);
        };
        let patient = self
            .patients
            .get_mut(&id)
            .ok_or_else(|| TriageError::Store(format!("CPF index points at missing id {id}")))?;
        Arc::make_mut(patient).apply_update(update);
        Ok(true)
    }

    fn delete_by_cpf(&mut self, cpf: &str) -> Result<bool> {
        let Some(id) = self.by_cpf.remove(cpf) else {
            return Ok(false);
        };
        self.patients.remove(&id);
        Ok(true)
    }
}

/// In-memory questionnaire store, one entry per patient
#[derive(Debug, Default)]
pub struct MemoryQuestionnaireStore {
    by_patient: FxHashMap<PatientId, Arc<Questionnaire>>,
}

impl MemoryQuestionnaireStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionnaireStore for MemoryQuestionnaireStore {
    fn get_by_patient(&self, id: PatientId) -> Result<Option<Arc<Questionnaire>>> {
        Ok(self.by_patient.get(&id).cloned())
    }

    fn upsert(&mut self, id: PatientId, questionnaire: Questionnaire) -> Result<()> {
        self.by_patient.insert(id, Arc::new(questionnaire));
        Ok(())
    }

    fn delete_by_patient(&mut self, id: PatientId) -> Result<bool> {
        Ok(self.by_patient.remove(&id).is_some())
    }
}
