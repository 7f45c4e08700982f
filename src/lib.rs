pub mod models;
pub mod processing;
pub mod record_validator;
pub mod report;
pub mod utils;
pub mod validation;

pub use record_validator::{load_batch, run, RecordValidator};
