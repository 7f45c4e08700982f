use crate::models::RuleContext;
use crate::utils::FieldInvalid;
use std::ops::RangeInclusive;

pub const CM_RANGE: RangeInclusive<u32> = 150..=193;
pub const IN_RANGE: RangeInclusive<u32> = 59..=76;

/// Height is a number followed by `cm` or `in`, inside that unit's range.
pub fn check_height(value: &str, _ctx: &RuleContext) -> Result<(), FieldInvalid> {
    let (number, range) = if let Some(number) = value.strip_suffix("cm") {
        (number, CM_RANGE)
    } else if let Some(number) = value.strip_suffix("in") {
        (number, IN_RANGE)
    } else {
        return Err(FieldInvalid::UnknownUnit(value.to_string()));
    };

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldInvalid::NotDigits {
            field: "height",
            value: value.to_string(),
        });
    }

    // Overlong digit strings fail to parse and count as out of range.
    match number.parse::<u32>() {
        Ok(n) if range.contains(&n) => Ok(()),
        _ => Err(FieldInvalid::OutOfRange {
            field: "height",
            value: value.to_string(),
        }),
    }
}
