use crate::utils::FieldInvalid;
use crate::validation::{dates, format, height};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// Per-field predicate. Returns the reason on rejection.
pub type FieldRule = fn(&str, &RuleContext) -> Result<(), FieldInvalid>;

/// Values shared by every rule during one run.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub current_year: i32,
    pub valid_eye_colors: &'a BTreeSet<&'static str>,
}

/// The fixed rule table: required fields, the predicate for each field,
/// and the accepted eye colors.
pub struct ValidationRuleSet {
    pub required_fields: Vec<&'static str>,
    pub validators: Vec<(&'static str, FieldRule)>,
    pub valid_eye_colors: BTreeSet<&'static str>,
}

static STANDARD_RULES: LazyLock<ValidationRuleSet> = LazyLock::new(ValidationRuleSet::new);

impl ValidationRuleSet {
    pub fn new() -> Self {
        ValidationRuleSet {
            required_fields: vec!["born", "issued", "expires", "height", "hair", "eyes", "usmca"],
            validators: vec![
                ("born", dates::check_born as FieldRule),
                ("issued", dates::check_issued as FieldRule),
                ("expires", dates::check_expires as FieldRule),
                ("height", height::check_height as FieldRule),
                ("hair", format::check_hair as FieldRule),
                ("eyes", format::check_eyes as FieldRule),
                ("usmca", format::check_usmca as FieldRule),
            ],
            valid_eye_colors: ["amber", "blue", "brown", "gray", "green", "hazel", "other"]
                .into_iter()
                .collect(),
        }
    }

    /// Process-wide read-only instance.
    pub fn standard() -> &'static ValidationRuleSet {
        &STANDARD_RULES
    }

    pub fn validator_for(&self, field: &str) -> Option<FieldRule> {
        self.validators
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rule)| *rule)
    }

    pub fn context(&self, current_year: i32) -> RuleContext<'_> {
        RuleContext {
            current_year,
            valid_eye_colors: &self.valid_eye_colors,
        }
    }
}

impl fmt::Debug for ValidationRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let validated: Vec<&str> = self.validators.iter().map(|(name, _)| *name).collect();
        f.debug_struct("ValidationRuleSet")
            .field("required_fields", &self.required_fields)
            .field("validators", &validated)
            .field("valid_eye_colors", &self.valid_eye_colors)
            .finish()
    }
}

impl Default for ValidationRuleSet {
    fn default() -> Self {
        ValidationRuleSet::new()
    }
}
