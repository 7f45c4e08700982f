use crate::models::Record;
use log::warn;

/// Splits a batch into records, one per blank-line separated block, in
/// source order. Blocks with no tokens are dropped.
pub fn parse_batch(text: &str) -> impl Iterator<Item = Record> + '_ {
    split_blocks(text)
        .into_iter()
        .map(|block| parse_record(&block))
        .filter(|record| !record.has_no_tokens())
}

/// Builds a record from one block. Tokens are split at their first `:`.
pub fn parse_record(block: &str) -> Record {
    let mut record = Record::new();
    for token in block.split_whitespace() {
        match token.split_once(':') {
            Some((key, value)) => record.insert(key, value),
            None => record.malformed_tokens.push(token.to_string()),
        }
    }
    if record.is_malformed() {
        warn!("Record has tokens without ':': {:?}", record.malformed_tokens);
    }
    record
}

// Groups consecutive non-blank lines. Handles `\r\n` and runs of blank lines.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join(" "));
    }
    blocks
}
