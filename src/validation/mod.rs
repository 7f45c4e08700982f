pub mod dates;
pub mod format;
pub mod height;
pub mod presence;

use crate::utils::FieldInvalid;

/// Parses a field that must be exactly `len` ASCII digits.
pub(crate) fn parse_digits(field: &'static str, value: &str, len: usize) -> Result<u32, FieldInvalid> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldInvalid::NotDigits {
            field,
            value: value.to_string(),
        });
    }
    value.parse::<u32>().map_err(|_| FieldInvalid::NotDigits {
        field,
        value: value.to_string(),
    })
}
