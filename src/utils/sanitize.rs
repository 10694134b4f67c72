//! Identifier scrubbing and validation
//!
//! CPF, SUS and CEP numbers arrive with whatever punctuation the operator
//! typed. Everything downstream (store keys, waitlist entries, scoring
//! inputs) works on digit-only strings produced here.

/// Strip every non-digit character from a raw identifier
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Format a CPF as `###.###.###-##`.
///
/// Input that does not scrub to exactly 11 digits is returned unchanged.
#[must_use]
pub fn format_cpf(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Validate a digit-only CPF, including both check digits.
///
/// Repeated-digit sequences ("11111111111") are rejected even though their
/// check digits are formally consistent.
#[must_use]
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 || cpf.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first_sum: u32 = digits[..9]
        .iter()
        .zip((2..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    if digits[9] != (first_sum * 10 % 11) % 10 {
        return false;
    }

    let second_sum: u32 = digits[..10]
        .iter()
        .zip((2..=11).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    digits[10] == (second_sum * 10 % 11) % 10
}

/// Validate a digit-only SUS card number (15 digits)
#[must_use]
pub fn is_valid_sus(sus: &str) -> bool {
    sus.len() == 15 && sus.chars().all(|c| c.is_ascii_digit())
}

/// Validate a digit-only CEP (8 digits)
#[must_use]
pub fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.chars().all(|c| c.is_ascii_digit())
}
