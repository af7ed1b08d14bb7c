//! Parsing of paired samples from text fields and two-column CSV

use crate::TTestConfig;
use paired_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Everything a computation request needs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PairedInput {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub config: TTestConfig,
}

impl PairedInput {
    pub fn new(x: Vec<f64>, y: Vec<f64>, config: TTestConfig) -> Self {
        Self { x, y, config }
    }

    /// Build from two comma-separated text fields
    pub fn from_fields(x_text: &str, y_text: &str, config: TTestConfig) -> Result<Self> {
        Ok(Self::new(
            parse_sample_field(x_text)?,
            parse_sample_field(y_text)?,
            config,
        ))
    }

    /// Build from two-column CSV content
    pub fn from_csv_reader<R: Read>(reader: R, config: TTestConfig) -> Result<Self> {
        let (x, y) = parse_pairs_csv(reader)?;
        Ok(Self::new(x, y, config))
    }

    /// Build from a `.csv` file
    pub fn from_csv_path(path: impl AsRef<Path>, config: TTestConfig) -> Result<Self> {
        let (x, y) = read_pairs_csv(path)?;
        Ok(Self::new(x, y, config))
    }
}

/// Parse a comma-separated list of numbers such as `"10, 12, 9"`
///
/// Every token must be a finite number; empty tokens are rejected.
pub fn parse_sample_field(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            parse_number(token).ok_or_else(|| {
                Error::InvalidInput(format!("'{token}' at position {} is not a number", i + 1))
            })
        })
        .collect()
}

/// Parse `x,y` records without a header row
///
/// Extra columns are ignored. Records missing either value are skipped;
/// a value that is present but not numeric is an error.
pub fn parse_pairs_csv<R: Read>(reader: R) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut skipped = 0usize;

    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());

        let (Some(x_field), Some(y_field)) = (record.get(0), record.get(1)) else {
            skipped += 1;
            continue;
        };
        if x_field.is_empty() || y_field.is_empty() {
            skipped += 1;
            continue;
        }

        x.push(parse_csv_value(x_field, line)?);
        y.push(parse_csv_value(y_field, line)?);
    }

    debug!("Parsed {} pairs, skipped {skipped} incomplete rows", x.len());
    Ok((x, y))
}

/// Read `x,y` pairs from a file with a `.csv` extension
pub fn read_pairs_csv(path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<f64>)> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(Error::InvalidInput(format!(
            "{} is not a CSV file",
            path.display()
        )));
    }

    let file = File::open(path)?;
    parse_pairs_csv(file)
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_csv_value(field: &str, line: u64) -> Result<f64> {
    parse_number(field)
        .ok_or_else(|| Error::InvalidInput(format!("'{field}' on line {line} is not a number")))
}

fn csv_error(err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        other => Error::InvalidInput(format!("Malformed CSV input: {other:?}")),
    }
}
