use crate::models::{BatchReport, Record, ValidationRuleSet};
use crate::processing::parse_batch;
use crate::report;
use crate::utils::{BatchConfig, FieldInvalid, PassportError};
use crate::validation::presence::check_presence;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Applies the rule set to parsed records against one reference year.
pub struct RecordValidator<'a> {
    rules: &'a ValidationRuleSet,
    current_year: i32,
    display_limit: usize,
}

impl RecordValidator<'static> {
    /// Standard rules against the given reference year.
    pub fn with_year(current_year: i32) -> Self {
        RecordValidator::with_rules(ValidationRuleSet::standard(), current_year)
    }
}

impl<'a> RecordValidator<'a> {
    pub fn with_rules(rules: &'a ValidationRuleSet, current_year: i32) -> Self {
        RecordValidator {
            rules,
            current_year,
            display_limit: crate::utils::config::DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Returns the first rule the record breaks, if any.
    pub fn check(&self, record: &Record) -> Result<(), FieldInvalid> {
        check_presence(record, self.rules)?;
        let ctx = self.rules.context(self.current_year);
        for (field, rule) in &self.rules.validators {
            let value = record.get(field).ok_or(FieldInvalid::Missing(*field))?;
            rule(value, &ctx)?;
        }
        Ok(())
    }

    pub fn is_valid(&self, record: &Record) -> bool {
        match self.check(record) {
            Ok(()) => true,
            Err(reason) => {
                debug!("Rejected record {}: {}", record, reason);
                false
            }
        }
    }

    /// Validates a whole batch in one pass. `count` covers every valid
    /// record; only the first `display_limit` of them are kept.
    pub fn run_batch(&self, text: &str) -> BatchReport {
        let mut report = BatchReport::default();
        let mut total = 0usize;
        for record in parse_batch(text) {
            total += 1;
            if !self.is_valid(&record) {
                continue;
            }
            report.count += 1;
            if report.records.len() < self.display_limit {
                report.records.push(record);
            }
        }
        info!(
            "Checked {} records against year {}: {} valid",
            total, self.current_year, report.count
        );
        report
    }

    pub fn run_file(&self, path: &Path) -> Result<BatchReport, PassportError> {
        let text = load_batch(path)?;
        Ok(self.run_batch(&text))
    }
}

/// Reads the whole batch file into memory.
pub fn load_batch(path: &Path) -> Result<String, PassportError> {
    fs::read_to_string(path).map_err(|source| PassportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One full run: read the configured source, validate, write the report.
pub fn run(config: &BatchConfig, out: &mut impl Write) -> Result<(), PassportError> {
    let validator =
        RecordValidator::with_year(config.current_year).display_limit(config.display_limit);
    let batch = validator.run_file(&config.source)?;
    let rendered = report::render(&batch, config.format)?;
    out.write_all(rendered.as_bytes())
        .map_err(PassportError::Output)
}
