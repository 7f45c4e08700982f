use crate::models::RuleContext;
use crate::utils::FieldInvalid;
use regex::Regex;
use std::sync::LazyLock;

static HAIR_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));
static DOCUMENT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("valid regex"));

/// `#` followed by six hex digits, either case.
pub fn check_hair(value: &str, _ctx: &RuleContext) -> Result<(), FieldInvalid> {
    if HAIR_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldInvalid::BadHairColor(value.to_string()))
    }
}

pub fn check_eyes(value: &str, ctx: &RuleContext) -> Result<(), FieldInvalid> {
    if ctx.valid_eye_colors.contains(value) {
        Ok(())
    } else {
        Err(FieldInvalid::UnknownEyeColor(value.to_string()))
    }
}

/// Document number: exactly nine decimal digits, leading zeros allowed.
pub fn check_usmca(value: &str, _ctx: &RuleContext) -> Result<(), FieldInvalid> {
    if DOCUMENT_NUMBER_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldInvalid::NotDigits {
            field: "usmca",
            value: value.to_string(),
        })
    }
}
