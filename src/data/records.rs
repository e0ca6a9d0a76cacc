//! Record parsing: turn raw `x,y,label` text into typed, label-indexed records.
//!
//! Input is newline-delimited with no header row. Every retained line becomes a
//! [`Record`] whose `index` counts the records emitted before it, so indices stay
//! contiguous no matter how many lines were skipped or rejected.

use std::collections::HashMap;

use thiserror::Error;

/// Field delimiter of the input format.
pub const DELIMITER: char = ',';

/// One parsed input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 0-based position among retained rows.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    /// 0-based first-seen order of `label` among distinct labels.
    pub label_index: usize,
}

/// Why a non-blank line was not turned into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("expected 3 fields (x,y,label), found {found}")]
    MissingFields { found: usize },
    #[error("{field} value {value:?} is not a finite number")]
    InvalidNumber { field: &'static str, value: String },
}

/// A rejected input line with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    pub line: usize,
    pub reason: RejectReason,
}

/// Full result of a parse: records, distinct labels and rejected rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub records: Vec<Record>,
    /// Distinct labels in first-seen order; `labels[r.label_index] == r.label`.
    pub labels: Vec<String>,
    pub rejected: Vec<RejectedLine>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse `text` into records, dropping blank and malformed lines.
pub fn parse(text: &str) -> Vec<Record> {
    parse_report(text).records
}

/// Parse `text` and keep track of the distinct labels and rejected lines.
pub fn parse_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut label_indices: HashMap<String, usize> = HashMap::new();

    for (line_no, raw) in text.split('\n').enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_fields(line) {
            Ok((x, y, label)) => {
                let label_index = match label_indices.get(label) {
                    Some(&i) => i,
                    None => {
                        let i = report.labels.len();
                        label_indices.insert(label.to_string(), i);
                        report.labels.push(label.to_string());
                        i
                    }
                };
                report.records.push(Record {
                    index: report.records.len(),
                    x,
                    y,
                    label: label.to_string(),
                    label_index,
                });
            }
            Err(reason) => {
                tracing::debug!(line = line_no + 1, %reason, "rejected input line");
                report.rejected.push(RejectedLine {
                    line: line_no + 1,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        records = report.records.len(),
        labels = report.labels.len(),
        rejected = report.rejected.len(),
        "parsed dataset"
    );
    report
}

fn parse_fields(line: &str) -> Result<(f64, f64, &str), RejectReason> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() < 3 {
        return Err(RejectReason::MissingFields {
            found: fields.len(),
        });
    }
    let x = parse_coordinate("x", fields[0])?;
    let y = parse_coordinate("y", fields[1])?;
    Ok((x, y, fields[2]))
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, RejectReason> {
    // f64::from_str accepts "NaN" and "inf"; those are rejected as well.
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RejectReason::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}
