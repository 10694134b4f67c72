//! Common domain type definitions
//!
//! This module contains the closed enum types used across domain models.
//! Label parsing is deliberately lenient: unrecognized input falls back to
//! the least specific variant instead of failing, so a misspelled label can
//! never crash intake or drop a patient from a listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage priority class
///
/// A closed set of five labels. Anything else entering the system is mapped
/// to [`Priority::NotUrgent`] at the parse boundary, which sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Immediate attention
    Emergency,
    /// Very urgent
    VeryUrgent,
    /// Urgent
    Urgent,
    /// Slightly urgent
    SlightlyUrgent,
    /// Not urgent (the safe default)
    NotUrgent,
}

impl Priority {
    /// Waitlist rank: 1 (most urgent) to 5 (least urgent)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Emergency => 1,
            Self::VeryUrgent => 2,
            Self::Urgent => 3,
            Self::SlightlyUrgent => 4,
            Self::NotUrgent => 5,
        }
    }

    /// Display label for this priority
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::VeryUrgent => "Very Urgent",
            Self::Urgent => "Urgent",
            Self::SlightlyUrgent => "Slightly Urgent",
            Self::NotUrgent => "Not Urgent",
        }
    }

    /// Parse an operator-entered override.
    ///
    /// Empty or whitespace-only input means "not overridden". Any non-empty
    /// input counts as an override, with unrecognized labels falling back to
    /// [`Priority::NotUrgent`] via the lenient conversion.
    #[must_use]
    pub fn from_override(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::from(trimmed))
        }
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "emergency" | "emergencia" | "emergência" | "1" => Self::Emergency,
            "very urgent" | "muito urgente" | "2" => Self::VeryUrgent,
            "urgent" | "urgente" | "3" => Self::Urgent,
            "slightly urgent" | "pouco urgente" | "4" => Self::SlightlyUrgent,
            _ => Self::NotUrgent,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI weight classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 24.9
    NormalWeight,
    /// BMI 24.9 to 30
    Overweight,
    /// BMI 30 to 35
    ObesityClassI,
    /// BMI 35 to 40
    ObesityClassII,
    /// BMI 40 and above
    ObesityClassIII,
}

impl WeightClass {
    /// Triage point contribution of this band (0-3)
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::NormalWeight | Self::Overweight => 0,
            Self::Underweight | Self::ObesityClassI => 1,
            Self::ObesityClassII => 2,
            Self::ObesityClassIII => 3,
        }
    }

    /// Display label for this band
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity class I",
            Self::ObesityClassII => "Obesity class II",
            Self::ObesityClassIII => "Obesity class III",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tri-state questionnaire answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriState {
    /// Affirmative answer
    Yes,
    /// Negative answer
    No,
    /// Not answered
    #[default]
    Unknown,
}

impl TriState {
    /// Whether the answer is affirmative
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<&str> for TriState {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "yes" | "sim" | "on" | "1" => Self::Yes,
            "no" | "nao" | "não" | "off" | "0" => Self::No,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for TriState {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Yes,
            0 => Self::No,
            _ => Self::Unknown,
        }
    }
}

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "masculino" | "1" => Self::Male,
            "f" | "female" | "feminino" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// ABO/Rh blood type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BloodType {
    /// A positive
    APositive,
    /// A negative
    ANegative,
    /// B positive
    BPositive,
    /// B negative
    BNegative,
    /// AB positive
    AbPositive,
    /// AB negative
    AbNegative,
    /// O positive
    OPositive,
    /// O negative
    ONegative,
    /// Unknown or not typed
    #[default]
    Unknown,
}

impl From<&str> for BloodType {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A+" => Self::APositive,
            "A-" => Self::ANegative,
            "B+" => Self::BPositive,
            "B-" => Self::BNegative,
            "AB+" => Self::AbPositive,
            "AB-" => Self::AbNegative,
            "O+" => Self::OPositive,
            "O-" => Self::ONegative,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
            Self::Unknown => "?",
        };
        f.write_str(label)
    }
}
