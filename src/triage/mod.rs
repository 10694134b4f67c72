//! The triage core: BMI classification, priority scoring, waitlist ordering
//!
//! Everything in this module is a pure, synchronous function over its
//! arguments. No store access, no shared state, no locking; concurrent
//! callers need no coordination.

pub mod bmi;
pub mod score;
pub mod waitlist;

pub use bmi::{BmiResult, classify, classify_raw};
pub use score::{ScoreBreakdown, TriageResult, score};
pub use waitlist::{WaitlistEntry, order};
