use crate::models::{Record, ValidationRuleSet};
use crate::utils::FieldInvalid;

/// Every required field is present and the block had no stray tokens.
pub fn check_presence(record: &Record, rules: &ValidationRuleSet) -> Result<(), FieldInvalid> {
    if let Some(token) = record.malformed_tokens.first() {
        return Err(FieldInvalid::MalformedToken(token.clone()));
    }
    match rules.required_fields.iter().find(|field| !record.contains(field)) {
        Some(field) => Err(FieldInvalid::Missing(*field)),
        None => Ok(()),
    }
}
