//! Comma-separated outcome table loading
//!
//! Format: one record per line, five unsigned integers
//! `depth_a,depth_b,wins_a,wins_b,ties`. Surrounding whitespace on the file,
//! each line and each field is ignored. Anything else is an error: no row
//! is skipped or defaulted.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::record::{Dataset, Record};
use crate::error::ChartError;

const FIELD_NAMES: [&str; 5] = ["depth_a", "depth_b", "wins_a", "wins_b", "ties"];

/// Read and parse an outcome table from disk
pub fn load_records(path: &Path) -> Result<Dataset, ChartError> {
    let content = fs::read_to_string(path).map_err(|source| ChartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_records(&content, path)?;

    debug!(
        "Loaded {}: {} records, dimension {}",
        path.display(),
        dataset.records().len(),
        dataset.dimension()
    );
    Ok(dataset)
}

/// Parse an outcome table; `source` only names the input in errors
pub fn parse_records(content: &str, source: &Path) -> Result<Dataset, ChartError> {
    let mut records = Vec::new();

    // Leading blank lines are trimmed away with the rest of the surrounding
    // whitespace, so count them to report real line numbers.
    let leading_lines = content.len() - content.trim_start().len();
    let first_line = 1 + content[..leading_lines].matches('\n').count();

    let body = content.trim();
    if body.is_empty() {
        return Err(ChartError::EmptyInput {
            path: source.to_path_buf(),
        });
    }

    for (offset, line) in body.lines().enumerate() {
        let line_no = first_line + offset;
        let record = parse_line(line, line_no, source)?;
        if record.total_games() == 0 {
            return Err(ChartError::ZeroTotal {
                path: source.to_path_buf(),
                line: line_no,
                depth_a: record.depth_a,
                depth_b: record.depth_b,
            });
        }
        records.push(record);
    }

    Dataset::from_records(records, source)
}

fn parse_line(line: &str, line_no: usize, source: &Path) -> Result<Record, ChartError> {
    let parse_err = |reason: String| ChartError::Parse {
        path: source.to_path_buf(),
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(parse_err(format!(
            "expected {} fields, found {}",
            FIELD_NAMES.len(),
            fields.len()
        )));
    }

    let mut values = [0u32; 5];
    for ((value, field), name) in values.iter_mut().zip(&fields).zip(FIELD_NAMES) {
        *value = field
            .parse()
            .map_err(|e| parse_err(format!("{name} {field:?} is not a non-negative integer: {e}")))?;
    }

    let [depth_a, depth_b, wins_a, wins_b, ties] = values;
    Ok(Record::new(depth_a, depth_b, wins_a, wins_b, ties))
}
