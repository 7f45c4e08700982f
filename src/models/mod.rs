pub mod data;
pub mod rules;

pub use data::{BatchReport, Record};
pub use rules::{FieldRule, RuleContext, ValidationRuleSet};
