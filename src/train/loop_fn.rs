use tracing::{debug, info};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::network::{Network, TrainedNetwork};
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

/// Result of a completed `train_loop`.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub network: TrainedNetwork,
    /// Loss of the last epoch, or `None` when zero epochs were requested.
    pub final_loss: Option<f64>,
    /// Every progress record emitted during the run, in order.
    pub reports: Vec<EpochStats>,
}

/// Trains `network` with full-batch gradient descent for exactly
/// `config.epochs` epochs and returns the frozen result.
///
/// # Arguments
/// - `network` — freshly initialized (or explicitly re-opened) network; consumed
/// - `inputs`  — training features, N × input_size
/// - `targets` — one-hot training targets, N × output_size
/// - `config`  — epochs, learning rate, report interval, optional progress channel
///
/// # Progress
/// Every `config.report_interval` epochs an [`EpochStats`] is logged at info
/// level and, if `config.progress_tx` is set, sent on the channel. A loss that
/// turns NaN or infinite is reported as-is.
///
/// # Errors
/// Shape and configuration problems are reported before the first epoch.
pub fn train_loop(
    network: Network,
    inputs: &Matrix,
    targets: &Matrix,
    config: &TrainConfig,
) -> Result<TrainingOutcome> {
    config.validate()?;
    let mut trainer = Trainer::new(network, inputs, targets, Sgd::new(config.learning_rate))?;

    debug!(
        samples = inputs.rows,
        features = inputs.cols,
        classes = targets.cols,
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        "starting training"
    );

    let mut final_loss = None;
    let mut reports = Vec::new();

    for epoch in 1..=config.epochs {
        let loss = trainer.step();
        final_loss = Some(loss);

        if epoch % config.report_interval == 0 {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss,
            };
            info!("{stats}");
            if let Some(ref tx) = config.progress_tx {
                // A vanished receiver only loses the report.
                let _ = tx.send(stats.clone());
            }
            reports.push(stats);
        }
    }

    Ok(TrainingOutcome {
        network: trainer.finish(),
        final_loss,
        reports,
    })
}

impl Network {
    /// Convenience wrapper around [`train_loop`].
    pub fn train(self, inputs: &Matrix, targets: &Matrix, config: &TrainConfig) -> Result<TrainingOutcome> {
        train_loop(self, inputs, targets, config)
    }
}
