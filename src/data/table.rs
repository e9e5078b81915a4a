//! Whitespace-delimited numeric tables.
//!
//! Format:
//! - one sample per line, fields separated by any run of spaces or tabs
//! - every column but the last is a real-valued feature
//! - the last column is a non-negative integer class label (`2` or `2.0`)
//! - blank lines and lines starting with `#` are skipped
//! - every data row must have the same number of columns
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Features plus integer labels, one row per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// N × D
    pub features: Matrix,
    /// N labels
    pub labels: Vec<usize>,
}

impl Dataset {
    /// Pairs features with labels. Panics if the row counts differ.
    pub fn new(features: Matrix, labels: Vec<usize>) -> Dataset {
        assert_eq!(
            features.rows,
            labels.len(),
            "dataset has {} feature rows but {} labels",
            features.rows,
            labels.len()
        );
        Dataset { features, labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.features.cols
    }

    /// Reads and parses a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dataset = parse_table(&text)?;
        debug!(
            path = %path.display(),
            samples = dataset.len(),
            features = dataset.feature_count(),
            "loaded table"
        );
        Ok(dataset)
    }
}

/// Parses a whole table from text.
pub fn parse_table(text: &str) -> Result<Dataset> {
    let mut features: Vec<f64> = Vec::new();
    let mut labels: Vec<usize> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() < 2 {
            return Err(parse_error(
                line_no,
                format!("expected at least 2 columns (features + label), got {}", cells.len()),
            ));
        }
        match width {
            None => width = Some(cells.len()),
            Some(w) if w != cells.len() => {
                return Err(parse_error(
                    line_no,
                    format!("row has {} columns but earlier rows have {}", cells.len(), w),
                ));
            }
            Some(_) => {}
        }

        let (feature_cells, label_cell) = cells.split_at(cells.len() - 1);
        for cell in feature_cells {
            features.push(parse_float(cell, line_no)?);
        }
        labels.push(parse_label(label_cell[0], line_no)?);
    }

    let cols = width.map_or(0, |w| w - 1);
    Ok(Dataset {
        features: Matrix::from_vec(labels.len(), cols, features),
        labels,
    })
}

fn parse_error(line: usize, message: String) -> Error {
    Error::Parse { line, message }
}

fn parse_float(cell: &str, line: usize) -> Result<f64> {
    cell.parse::<f64>()
        .map_err(|_| parse_error(line, format!("'{cell}' is not a valid number")))
}

/// Accepts `3` as well as integral floats such as `3.0`.
fn parse_label(cell: &str, line: usize) -> Result<usize> {
    if let Ok(label) = cell.parse::<usize>() {
        return Ok(label);
    }
    let value = parse_float(cell, line)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(parse_error(
            line,
            format!("class label '{cell}' is not a non-negative integer"),
        ));
    }
    Ok(value as usize)
}
