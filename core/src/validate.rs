//! Input validation for meal names, dates and ingredient lists.

use chrono::{Local, NaiveDate};

use crate::error::{PlannerError, Result};

/// Parse a `YYYY-MM-DD` date and reject anything before today.
pub fn validate_date(input: &str) -> Result<NaiveDate> {
    validate_date_on(input, Local::now().date_naive())
}

/// Like [`validate_date`], with an explicit "today".
pub fn validate_date_on(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let s = input.trim();
    if !has_iso_date_shape(s) {
        return Err(PlannerError::InvalidFormat(s.to_string()));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidFormat(s.to_string()))?;
    if date < today {
        return Err(PlannerError::PastDate { date, today });
    }
    Ok(date)
}

// chrono alone accepts "2099-1-5" and signed years.
fn has_iso_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Split a comma-separated list into trimmed, non-empty ingredients.
///
/// Order and duplicates are preserved.
pub fn parse_ingredients(input: &str) -> Result<Vec<String>> {
    let ingredients: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if ingredients.is_empty() {
        return Err(PlannerError::EmptyIngredientList);
    }
    Ok(ingredients)
}

pub fn validate_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(PlannerError::EmptyName);
    }
    Ok(name.to_string())
}
