pub mod config;
pub mod error;

pub use config::{BatchConfig, Cli, OutputFormat};
pub use error::{FieldInvalid, PassportError};
