//! Loading labelled instances from line-oriented text.
//!
//! Each non-blank line holds one instance: a leading integer label followed
//! by whitespace-separated integer attribute values. Every line must carry
//! the same number of attributes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::instance::Instance;

/// Errors raised while reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid field `{field}`")]
    InvalidField { line: usize, field: String },
    #[error("line {line}: expected {expected} attributes, got {got}")]
    WidthMismatch {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("dataset contains no instances")]
    Empty,
}

/// Read instances from any buffered reader. Blank lines are skipped; the
/// first data line fixes the attribute width for the rest of the input.
pub fn read_instances<R: BufRead>(reader: R) -> Result<Vec<Instance>, DatasetError> {
    let mut instances = Vec::new();
    let mut width: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(label_field) = fields.next() else {
            continue;
        };
        let label: i32 = label_field
            .parse()
            .map_err(|_| DatasetError::InvalidField {
                line: line_no,
                field: label_field.to_owned(),
            })?;
        let mut attributes = Vec::new();
        for field in fields {
            let value: u32 = field.parse().map_err(|_| DatasetError::InvalidField {
                line: line_no,
                field: field.to_owned(),
            })?;
            attributes.push(value);
        }
        match width {
            None => width = Some(attributes.len()),
            Some(expected) if expected != attributes.len() => {
                return Err(DatasetError::WidthMismatch {
                    line: line_no,
                    expected,
                    got: attributes.len(),
                });
            }
            Some(_) => {}
        }
        instances.push(Instance::new(label, attributes));
    }

    if instances.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(instances)
}

/// Read instances from a file on disk.
pub fn read_instances_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Instance>, DatasetError> {
    let file = File::open(path)?;
    read_instances(BufReader::new(file))
}
