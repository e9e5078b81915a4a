use std::sync::mpsc;

use crate::error::{Error, Result};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`          — number of full-batch gradient steps; always run to completion
/// - `learning_rate`   — step size of the gradient-descent update
/// - `report_interval` — one `EpochStats` is emitted every this many epochs
/// - `progress_tx`     — optional channel receiving each `EpochStats`.  A
///                       dropped receiver is ignored; training never stops early.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub report_interval: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Reports every 1000 epochs, no progress channel.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            report_interval: 1000,
            progress_tx: None,
        }
    }

    pub fn with_report_interval(mut self, report_interval: usize) -> Self {
        self.report_interval = report_interval;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.report_interval == 0 {
            return Err(Error::InvalidConfig("report interval must be at least 1".into()));
        }
        Ok(())
    }
}
