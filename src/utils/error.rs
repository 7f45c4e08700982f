use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run. Per-record problems never end up here.
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldInvalid {
    #[error("required field `{0}` is missing")]
    Missing(&'static str),
    #[error("token `{0}` is not a key:value pair")]
    MalformedToken(String),
    #[error("field `{field}` expects digits, got `{value}`")]
    NotDigits { field: &'static str, value: String },
    #[error("field `{field}` value `{value}` is out of range")]
    OutOfRange { field: &'static str, value: String },
    #[error("height `{0}` has no cm/in unit")]
    UnknownUnit(String),
    #[error("hair color `{0}` is not #rrggbb")]
    BadHairColor(String),
    #[error("eye color `{0}` is not recognised")]
    UnknownEyeColor(String),
}
