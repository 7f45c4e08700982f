use super::parse_digits;
use crate::models::RuleContext;
use crate::utils::FieldInvalid;

pub const MINIMUM_AGE: i32 = 21;
pub const VALIDITY_WINDOW_YEARS: i32 = 10;

fn parse_year(field: &'static str, value: &str) -> Result<i32, FieldInvalid> {
    // Four digits always fit in an i32.
    parse_digits(field, value, 4).map(|year| year as i32)
}

// Year arithmetic that cannot overflow for any reference year.
fn years_between(later: i32, earlier: i32) -> Option<i32> {
    later.checked_sub(earlier)
}

fn out_of_range(field: &'static str, value: &str) -> FieldInvalid {
    FieldInvalid::OutOfRange {
        field,
        value: value.to_string(),
    }
}

/// Holder must be at least 21 in the reference year.
pub fn check_born(value: &str, ctx: &RuleContext) -> Result<(), FieldInvalid> {
    let born = parse_year("born", value)?;
    match years_between(ctx.current_year, born) {
        Some(age) if age >= MINIMUM_AGE => Ok(()),
        _ => Err(out_of_range("born", value)),
    }
}

/// Issued no later than the reference year and at most 10 years before it.
pub fn check_issued(value: &str, ctx: &RuleContext) -> Result<(), FieldInvalid> {
    let issued = parse_year("issued", value)?;
    match years_between(ctx.current_year, issued) {
        Some(elapsed) if (0..=VALIDITY_WINDOW_YEARS).contains(&elapsed) => Ok(()),
        _ => Err(out_of_range("issued", value)),
    }
}

/// Expires no earlier than the reference year and at most 10 years after it.
pub fn check_expires(value: &str, ctx: &RuleContext) -> Result<(), FieldInvalid> {
    let expires = parse_year("expires", value)?;
    match years_between(expires, ctx.current_year) {
        Some(remaining) if (0..=VALIDITY_WINDOW_YEARS).contains(&remaining) => Ok(()),
        _ => Err(out_of_range("expires", value)),
    }
}
