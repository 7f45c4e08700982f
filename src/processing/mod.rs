pub mod parser;

pub use parser::{parse_batch, parse_record};
