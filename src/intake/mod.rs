//! Intake orchestration
//!
//! `IntakeService` glues the stores to the triage core: it validates
//! identifiers and measurement windows, computes and caches BMI at
//! registration, scores questionnaires, and joins the registry with stored
//! priorities into an ordered waitlist. All triage math stays in
//! [`crate::triage`]; this module only fetches, validates and persists.

use crate::config::IntakeConfig;
use crate::error::{Result, TriageError};
use crate::models::patient::{Patient, PatientId, PatientUpdate};
use crate::models::questionnaire::Questionnaire;
use crate::models::types::{BloodType, Gender, Priority, TriState};
use crate::models::vitals::{RiskFlags, VitalSigns};
use crate::store::{PatientStore, QuestionnaireStore};
use crate::triage::bmi::classify_raw;
use crate::triage::score::{TriageResult, score};
use crate::triage::waitlist::{WaitlistEntry, order};
use crate::utils::date_utils::age_today;
use crate::utils::sanitize::{digits_only, is_valid_cep, is_valid_cpf, is_valid_sus};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Registration form for a patient, as the front end submits it.
///
/// Measurements stay form-shaped (strings) here: parsing them leniently is
/// part of the intake contract, and an unusable height or weight simply
/// leaves the BMI undefined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRegistration {
    /// CPF, any punctuation accepted
    pub cpf: String,
    /// SUS card number, optional
    pub sus: Option<String>,
    /// Full name
    pub name: String,
    /// Blood type label ("A+", "O-", ...)
    pub blood_type: String,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Gender label
    pub gender: String,
    /// Height in centimeters, form-shaped
    pub height: String,
    /// Weight in kilograms, form-shaped
    pub weight: String,
    /// Postal code (CEP), any punctuation accepted
    pub cep: String,
    /// District of the address
    pub district: Option<String>,
    /// Street of the address
    pub street: Option<String>,
}

/// Questionnaire form, as the front end submits it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionnaireForm {
    /// Comorbidity and habit flags, already coerced to booleans
    pub flags: RiskFlags,
    /// Regular medication answer ("sim"/"nao"/...)
    pub medication: String,
    /// Which medication, free text
    pub medication_detail: Option<String>,
    /// Allergy answer
    pub allergies: String,
    /// Which allergies, free text
    pub allergy_detail: Option<String>,
    /// Disease history answer
    pub disease_history: String,
    /// History details, free text
    pub history_detail: Option<String>,
    /// Raw blood pressure reading ("120/80")
    pub pressure: String,
    /// Body temperature (°C)
    pub temperature: Option<f64>,
    /// Free-text observations
    pub notes: Option<String>,
    /// Manual priority override label; empty means no override
    pub manual_priority: String,
}

/// Intake orchestration over a pair of stores
#[derive(Debug)]
pub struct IntakeService<P, Q> {
    patients: P,
    questionnaires: Q,
    config: IntakeConfig,
}

impl<P: PatientStore, Q: QuestionnaireStore> IntakeService<P, Q> {
    /// Create a service with default configuration
    pub fn new(patients: P, questionnaires: Q) -> Self {
        Self::with_config(patients, questionnaires, IntakeConfig::default())
    }

    /// Create a service with explicit configuration
    pub fn with_config(patients: P, questionnaires: Q, config: IntakeConfig) -> Self {
        Self {
            patients,
            questionnaires,
            config,
        }
    }

    /// Access the underlying patient store
    pub fn patients(&self) -> &P {
        &self.patients
    }

    /// Access the underlying questionnaire store
    pub fn questionnaires(&self) -> &Q {
        &self.questionnaires
    }

    /// Register a new patient or update the mutable fields of an existing
    /// one, keyed by CPF.
    ///
    /// First registration requires the full form; later submissions only
    /// touch the mutable subset (gender, measurements, address). BMI is
    /// recomputed and cached whenever height and weight are usable.
    pub fn register_patient(&mut self, registration: PatientRegistration) -> Result<PatientId> {
        let cpf = digits_only(&registration.cpf);
        if !is_valid_cpf(&cpf) {
            return Err(TriageError::InvalidIdentifier {
                kind: "CPF",
                value: registration.cpf,
            });
        }

        let sus = match registration.sus.as_deref().map(digits_only) {
            Some(digits) if !digits.is_empty() => {
                if !is_valid_sus(&digits) {
                    return Err(TriageError::InvalidIdentifier {
                        kind: "SUS",
                        value: registration.sus.unwrap_or_default(),
                    });
                }
                Some(digits)
            }
            _ => {
                if self.config.require_sus {
                    return Err(TriageError::MissingField("sus"));
                }
                None
            }
        };

        let cep = digits_only(&registration.cep);
        if !is_valid_cep(&cep) {
            return Err(TriageError::InvalidIdentifier {
                kind: "CEP",
                value: registration.cep,
            });
        }

        let bmi = classify_raw(&registration.height, &registration.weight);
        if bmi.is_none() {
            debug!("BMI undefined for CPF {cpf}: unusable height/weight");
        }

        if let Some(existing) = self.patients.get_by_cpf(&cpf)? {
            let update = PatientUpdate {
                gender: Some(Gender::from(registration.gender.as_str())),
                height_cm: registration.height.trim().parse().ok(),
                weight_kg: registration.weight.trim().parse().ok(),
                postal_code: Some(cep),
                district: registration.district,
                street: registration.street,
                bmi,
            };
            self.patients.update_by_cpf(&cpf, update)?;
            info!("updated patient {}", existing.id);
            return Ok(existing.id);
        }

        require_filled("name", &registration.name)?;
        require_filled("blood_type", &registration.blood_type)?;
        require_filled("gender", &registration.gender)?;
        require_filled("height", &registration.height)?;
        require_filled("weight", &registration.weight)?;
        let birth_date = registration
            .birth_date
            .ok_or(TriageError::MissingField("birth_date"))?;

        let mut patient = Patient::new(0, cpf, registration.name.trim().to_string());
        patient.sus = sus;
        patient.blood_type = BloodType::from(registration.blood_type.as_str());
        patient.birth_date = Some(birth_date);
        patient.gender = Gender::from(registration.gender.as_str());
        patient.height_cm = registration.height.trim().parse().ok();
        patient.weight_kg = registration.weight.trim().parse().ok();
        patient.postal_code = Some(cep);
        patient.district = registration.district;
        patient.street = registration.street;
        patient.bmi = bmi;

        let id = self.patients.insert(patient)?;
        info!("registered patient {id}");
        Ok(id)
    }

    /// Score and persist a questionnaire for the patient with the given CPF.
    ///
    /// Temperature outside the configured window is rejected here, before
    /// the scorer runs; everything else degrades instead of failing.
    pub fn submit_questionnaire(
        &mut self,
        cpf: &str,
        form: QuestionnaireForm,
    ) -> Result<TriageResult> {
        let cpf = digits_only(cpf);
        let patient = self
            .patients
            .get_by_cpf(&cpf)?
            .ok_or_else(|| TriageError::PatientNotFound(cpf.clone()))?;

        if let Some(temperature) = form.temperature {
            if temperature < self.config.temperature_min
                || temperature > self.config.temperature_max
            {
                return Err(TriageError::OutOfRange {
                    field: "temperature",
                    value: temperature,
                });
            }
        }

        let vitals = VitalSigns::from_reading(&form.pressure, form.temperature);
        if vitals.pressure().is_none() && !form.pressure.trim().is_empty() {
            warn!("unparseable pressure reading for patient {}: scoring it as zero", patient.id);
        }

        let age_years = patient.birth_date.map(age_today);
        let bmi_points = patient.bmi.map(|b| b.points);
        let manual_override = Priority::from_override(&form.manual_priority);

        let result = score(&vitals, age_years, bmi_points, &form.flags, manual_override);
        if self.config.log_scoring {
            info!(
                "patient {} scored {} (pressure {}, temperature {}, age {}, bmi {}, other {}) -> {}",
                patient.id,
                result.total,
                result.breakdown.pressure,
                result.breakdown.temperature,
                result.breakdown.age,
                result.breakdown.bmi,
                result.breakdown.other,
                result.effective(),
            );
        }

        let questionnaire = Questionnaire {
            flags: form.flags,
            medication: TriState::from(form.medication.as_str()),
            medication_detail: non_empty(form.medication_detail),
            allergies: TriState::from(form.allergies.as_str()),
            allergy_detail: non_empty(form.allergy_detail),
            disease_history: TriState::from(form.disease_history.as_str()),
            history_detail: non_empty(form.history_detail),
            pressure: form.pressure.trim().to_string(),
            temperature: form.temperature,
            notes: non_empty(form.notes),
            auto_priority: result.auto_priority,
            priority: result.effective(),
            age_years,
            physician_crm: None,
        };
        self.questionnaires.upsert(patient.id, questionnaire)?;

        Ok(result)
    }

    /// Build the display-ordered waitlist.
    ///
    /// Every registered patient appears; a missing questionnaire means
    /// "Not Urgent". Entries come from the store in name order, which the
    /// orderer's stable sort preserves within each priority.
    pub fn waitlist(&self) -> Result<Vec<WaitlistEntry>> {
        let mut entries = Vec::new();
        for patient in self.patients.list()? {
            let priority = self
                .questionnaires
                .get_by_patient(patient.id)?
                .map_or(Priority::NotUrgent, |q| q.priority);
            entries.push(WaitlistEntry::new(
                patient.cpf.clone(),
                patient.name.clone(),
                priority,
            ));
        }
        Ok(order(entries))
    }

    /// Search patients by case-insensitive name substring or CPF fragment
    pub fn search(&self, query: &str) -> Result<Vec<Arc<Patient>>> {
        let needle = query.trim().to_lowercase();
        let all = self.patients.list()?;
        if needle.is_empty() {
            return Ok(all);
        }
        Ok(all
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.cpf.contains(&needle))
            .collect())
    }

    /// Remove a patient and their stored questionnaire.
    ///
    /// Returns `false` when no patient has the given CPF.
    pub fn remove_patient(&mut self, cpf: &str) -> Result<bool> {
        let cpf = digits_only(cpf);
        let Some(patient) = self.patients.get_by_cpf(&cpf)? else {
            return Ok(false);
        };
        self.questionnaires.delete_by_patient(patient.id)?;
        self.patients.delete_by_cpf(&cpf)?;
        info!("removed patient {}", patient.id);
        Ok(true)
    }
}

fn require_filled(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(TriageError::MissingField(field))
    } else {
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
