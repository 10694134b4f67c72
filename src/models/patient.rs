//! Patient entity model
//!
//! A `Patient` is the registry record built at intake: identity documents,
//! demographics, measurements and the cached BMI classification. Identity
//! fields (CPF, SUS, name, blood type, birth date) are immutable after
//! first registration; everything else can change on a later visit.

use crate::models::types::{BloodType, Gender};
use crate::triage::bmi::BmiResult;
use crate::utils::date_utils::age_in_years;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique patient identifier assigned by the store
pub type PatientId = u64;

/// Registry record for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Store-assigned identifier
    pub id: PatientId,
    /// CPF, digits only (11)
    pub cpf: String,
    /// SUS card number, digits only (15), if provided
    pub sus: Option<String>,
    /// Full name
    pub name: String,
    /// ABO/Rh blood type
    pub blood_type: BloodType,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Postal code (CEP), digits only (8)
    pub postal_code: Option<String>,
    /// District of the address
    pub district: Option<String>,
    /// Street of the address
    pub street: Option<String>,
    /// BMI classification cached at the last registration or update
    pub bmi: Option<BmiResult>,
}

impl Patient {
    /// Create a patient with minimal identity information
    #[must_use]
    pub const fn new(id: PatientId, cpf: String, name: String) -> Self {
        Self {
            id,
            cpf,
            sus: None,
            name,
            blood_type: BloodType::Unknown,
            birth_date: None,
            gender: Gender::Unknown,
            height_cm: None,
            weight_kg: None,
            postal_code: None,
            district: None,
            street: None,
            bmi: None,
        }
    }

    /// Age in whole years at a reference date, if the birth date is known
    #[must_use]
    pub fn age_on(&self, reference: NaiveDate) -> Option<u32> {
        self.birth_date.map(|birth| age_in_years(birth, reference))
    }

    /// Apply a mutable-field update in place.
    ///
    /// Fields left as `None` in the update keep their current value, so a
    /// partial update never clears data it did not touch.
    pub fn apply_update(&mut self, update: PatientUpdate) {
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = Some(height_cm);
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = Some(weight_kg);
        }
        if let Some(postal_code) = update.postal_code {
            self.postal_code = Some(postal_code);
        }
        if let Some(district) = update.district {
            self.district = Some(district);
        }
        if let Some(street) = update.street {
            self.street = Some(street);
        }
        if let Some(bmi) = update.bmi {
            self.bmi = Some(bmi);
        }
    }
}

/// The subset of patient fields a later visit may change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdate {
    /// New gender
    pub gender: Option<Gender>,
    /// New height in centimeters
    pub height_cm: Option<f64>,
    /// New weight in kilograms
    pub weight_kg: Option<f64>,
    /// New postal code, digits only
    pub postal_code: Option<String>,
    /// New district
    pub district: Option<String>,
    /// New street
    pub street: Option<String>,
    /// Recomputed BMI classification
    pub bmi: Option<BmiResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_follows_the_birthday() {
        let mut patient = Patient::new(1, "52998224725".to_string(), "Bruno Lima".to_string());
        assert_eq!(
            patient.age_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            None
        );

        patient.birth_date = NaiveDate::from_ymd_opt(1992, 11, 2);
        assert_eq!(
            patient.age_on(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()),
            Some(32)
        );
        assert_eq!(
            patient.age_on(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()),
            Some(33)
        );
    }

    #[test]
    fn partial_update_keeps_untouched_fields() {
        let mut patient = Patient::new(1, "52998224725".to_string(), "Bruno Lima".to_string());
        patient.height_cm = Some(180.0);
        patient.district = Some("Centro".to_string());

        patient.apply_update(PatientUpdate {
            weight_kg: Some(82.5),
            ..PatientUpdate::default()
        });

        assert_eq!(patient.weight_kg, Some(82.5));
        assert_eq!(patient.height_cm, Some(180.0));
        assert_eq!(patient.district.as_deref(), Some("Centro"));
    }
}
