//! Utility functions shared across the crate

pub mod date_utils;
pub mod sanitize;

pub use date_utils::{age_in_years, age_today};
pub use sanitize::{digits_only, format_cpf, is_valid_cep, is_valid_cpf, is_valid_sus};
