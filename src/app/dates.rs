use chrono::{Days, Local, NaiveDate};

use crate::{
    error::{FetchError, Result},
    models::DateKey,
};

pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 10;

pub fn validate_day_count(days: i64) -> Result<usize> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(FetchError::Validation(days));
    }
    Ok(days as usize)
}

/// Dates from today backwards, today first.
pub fn date_range(days: i64) -> Result<Vec<DateKey>> {
    date_range_from(Local::now().date_naive(), days)
}

pub fn date_range_from(today: NaiveDate, days: i64) -> Result<Vec<DateKey>> {
    let days = validate_day_count(days)?;

    (0..days as u64)
        .map(|offset| {
            today
                .checked_sub_days(Days::new(offset))
                .map(DateKey::from)
                .ok_or(FetchError::Validation(days as i64))
        })
        .collect()
}
