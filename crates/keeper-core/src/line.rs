//! Pipe-delimited line codec.
//!
//! Each line in a store file is one record, its fields joined by ` | `.
//! Blank lines are skipped; any other line that does not decode is reported
//! with its 1-based line number.

use crate::record::Record;

/// Field separator used by every store file.
pub const DELIMITER: &str = " | ";

/// Why a single line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("unknown record kind \"{0}\"")]
    UnknownKind(String),

    #[error("done flag must be 0 or 1, found \"{0}\"")]
    InvalidFlag(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// A decode failure located in a sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source} (\"{content}\")")]
pub struct DecodeError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line.
    pub content: String,
    pub source: LineError,
}

/// Splits a line into its fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Joins fields into a line.
pub fn join_fields(fields: &[&str]) -> String {
    fields.join(DELIMITER)
}

/// Checks a split line has exactly `expected` fields.
pub fn expect_fields(fields: &[&str], expected: usize) -> Result<(), LineError> {
    if fields.len() != expected {
        return Err(LineError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Encodes records as lines, in collection order.
pub fn encode_all<R: Record>(records: &[R]) -> Vec<String> {
    records.iter().map(Record::to_line).collect()
}

/// Decodes lines into records, stopping at the first bad line.
pub fn decode_all<R: Record, S: AsRef<str>>(lines: &[S]) -> Result<Vec<R>, DecodeError> {
    let mut records = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let record = R::from_line(line).map_err(|source| DecodeError {
            line: i + 1,
            content: line.to_owned(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}
