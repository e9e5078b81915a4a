use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Encodes each label as a row with a single `1.0` at the label's index.
///
/// Fails with [`Error::InvalidLabel`] on the first label `>= class_count`.
pub fn encode(labels: &[usize], class_count: usize) -> Result<Matrix> {
    let mut res = Matrix::zeros(labels.len(), class_count);
    for (i, &label) in labels.iter().enumerate() {
        if label >= class_count {
            return Err(Error::InvalidLabel { label, class_count });
        }
        res.set(i, label, 1.0);
    }
    Ok(res)
}

/// Recovers one class per row: the column of the row maximum, first
/// occurrence winning ties. Works on one-hot targets and on raw scores.
pub fn decode(scores: &Matrix) -> Vec<usize> {
    scores.argmax_rows()
}

/// Encoder whose class count is fixed from a training label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneHotEncoder {
    class_count: usize,
}

impl OneHotEncoder {
    /// Sets the class count to the number of distinct training labels.
    pub fn fit(labels: &[usize]) -> Self {
        let distinct: BTreeSet<usize> = labels.iter().copied().collect();
        OneHotEncoder {
            class_count: distinct.len(),
        }
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn encode(&self, labels: &[usize]) -> Result<Matrix> {
        encode(labels, self.class_count)
    }
}
