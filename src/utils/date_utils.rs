//! Age derivation from birth dates

use chrono::{Datelike, Local, NaiveDate};

/// Age in whole years at a reference date.
///
/// One year is subtracted when the birthday has not yet occurred in the
/// reference year. A birth date in the future clamps to zero.
#[must_use]
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Age in whole years as of today (local time)
#[must_use]
pub fn age_today(birth: NaiveDate) -> u32 {
    age_in_years(birth, Local::now().date_naive())
}
