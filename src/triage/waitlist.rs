//! Waitlist ordering
//!
//! Orders patients for display by priority rank. The sort is stable:
//! entries with equal priority keep their input order, and no secondary
//! key is applied. Callers that need a deterministic listing feed the
//! orderer an already-deterministic sequence (the intake service uses the
//! store's name-ordered listing).

use crate::models::types::Priority;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One row of the displayed waitlist
///
/// Built fresh on every listing request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Patient CPF, digits only
    pub cpf: String,
    /// Display name
    pub name: String,
    /// Effective triage priority
    pub priority: Priority,
}

impl WaitlistEntry {
    /// Create a waitlist entry
    #[must_use]
    pub const fn new(cpf: String, name: String, priority: Priority) -> Self {
        Self {
            cpf,
            name,
            priority,
        }
    }
}

/// Order entries for display, most urgent first.
#[must_use]
pub fn order(entries: Vec<WaitlistEntry>) -> Vec<WaitlistEntry> {
    // Itertools::sorted_by_key is a stable sort, which the equal-priority
    // ordering guarantee relies on.
    entries
        .into_iter()
        .sorted_by_key(|entry| entry.priority.rank())
        .collect()
}
