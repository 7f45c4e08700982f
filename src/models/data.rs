use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One passport record: field name to raw field value.
///
/// Tokens that had no `:` are kept aside in `malformed_tokens` so the
/// record can be rejected during validation instead of at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub malformed_tokens: Vec<String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Inserts a field. A repeated key overwrites the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the block contained no tokens at all, well-formed or not.
    pub fn has_no_tokens(&self) -> bool {
        self.fields.is_empty() && self.malformed_tokens.is_empty()
    }

    pub fn is_malformed(&self) -> bool {
        !self.malformed_tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

// Renders as `{born=1990, eyes=blue, ...}` with keys in sorted order.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Total valid records in the whole batch.
    pub count: usize,
    /// The first valid records in source order, capped by the display limit.
    pub records: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_sorted_key_value_list() {
        let record: Record = [("hair", "#123abc"), ("born", "1990")].into_iter().collect();
        assert_eq!(record.to_string(), "{born=1990, hair=#123abc}");
    }

    #[test]
    fn empty_record_displays_braces() {
        assert_eq!(Record::new().to_string(), "{}");
    }

    #[test]
    fn malformed_only_record_is_empty_but_has_tokens() {
        let mut record = Record::new();
        record.malformed_tokens.push("stray".to_string());
        assert_eq!(record.len(), 0);
        assert!(record.is_empty());
        assert!(!record.has_no_tokens());
    }

    #[test]
    fn later_insert_wins() {
        let record: Record = [("eyes", "blue"), ("eyes", "green")].into_iter().collect();
        assert_eq!(record.get("eyes"), Some("green"));
        assert_eq!(record.len(), 1);
    }
}
