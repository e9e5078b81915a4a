use std::sync::mpsc;

use serde::Serialize;
use tracing::info;

use crate::config::RunConfig;
use crate::data::table::Dataset;
use crate::encoding::one_hot::OneHotEncoder;
use crate::error::{Error, Result};
use crate::eval::evaluator::{evaluate, Evaluation};
use crate::network::network::{Network, TrainedNetwork};
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;

/// Everything a train-then-evaluate run produces.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// Class count fixed from the training labels.
    pub class_count: usize,
    pub feature_count: usize,
    pub final_loss: Option<f64>,
    pub progress: Vec<EpochStats>,
    pub evaluation: Evaluation,
    #[serde(skip)]
    pub network: TrainedNetwork,
}

/// Encodes both tables, trains a fresh network on `train` and evaluates it
/// on `test`.
///
/// The class count comes from the training labels only. Every shape and label
/// check (feature widths, labels inside `[0, C)` in both tables) runs before
/// the first epoch.
pub fn run(
    train: &Dataset,
    test: &Dataset,
    config: &RunConfig,
    progress_tx: Option<mpsc::Sender<EpochStats>>,
) -> Result<RunOutcome> {
    config.validate()?;
    if train.is_empty() {
        return Err(Error::EmptyDataset("training set"));
    }
    if test.is_empty() {
        return Err(Error::EmptyDataset("test set"));
    }
    if test.feature_count() != train.feature_count() {
        return Err(Error::ShapeMismatch {
            what: "test feature width",
            expected: train.feature_count(),
            found: test.feature_count(),
        });
    }

    let encoder = OneHotEncoder::fit(&train.labels);
    let train_targets = encoder.encode(&train.labels)?;
    let test_targets = encoder.encode(&test.labels)?;

    info!(
        train_samples = train.len(),
        test_samples = test.len(),
        features = train.feature_count(),
        classes = encoder.class_count(),
        hidden = config.hidden_size,
        "dataset ready"
    );

    let network = Network::new(
        train.feature_count(),
        config.hidden_size,
        encoder.class_count(),
        config.seed,
    );
    let mut train_config = config.train_config();
    train_config.progress_tx = progress_tx;
    let outcome = train_loop(network, &train.features, &train_targets, &train_config)?;

    let evaluation = evaluate(&outcome.network, &test.features, &test_targets)?;

    Ok(RunOutcome {
        class_count: encoder.class_count(),
        feature_count: train.feature_count(),
        final_loss: outcome.final_loss,
        progress: outcome.reports,
        evaluation,
        network: outcome.network,
    })
}
