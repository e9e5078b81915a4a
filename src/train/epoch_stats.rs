use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress record emitted every `report_interval` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Halved MSE measured during this epoch, before its update.
    pub loss: f64,
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch {}/{}, Loss: {}", self.epoch, self.total_epochs, self.loss)
    }
}
