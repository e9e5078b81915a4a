use tracing::warn;

use crate::error::{Error, Result};
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::{Network, TrainedNetwork};
use crate::optim::sgd::Sgd;
use crate::train::backprop::backward;

/// Owns a [`Network`] for the duration of training and advances it one
/// full-batch epoch at a time.
pub struct Trainer<'a> {
    network: Network,
    inputs: &'a Matrix,
    targets: &'a Matrix,
    optimizer: Sgd,
    epochs_done: usize,
    diverged: bool,
}

impl<'a> Trainer<'a> {
    /// Checks every shape once, before the first forward pass.
    ///
    /// `inputs` is N × input_size and `targets` is the N × output_size one-hot
    /// matrix matching the network.
    pub fn new(
        network: Network,
        inputs: &'a Matrix,
        targets: &'a Matrix,
        optimizer: Sgd,
    ) -> Result<Trainer<'a>> {
        let params = network.parameters();
        if inputs.rows == 0 {
            return Err(Error::EmptyDataset("training set"));
        }
        if targets.rows != inputs.rows {
            return Err(Error::ShapeMismatch {
                what: "training target rows",
                expected: inputs.rows,
                found: targets.rows,
            });
        }
        if inputs.cols != params.input_size() {
            return Err(Error::ShapeMismatch {
                what: "training feature width",
                expected: params.input_size(),
                found: inputs.cols,
            });
        }
        if targets.cols != params.output_size() {
            return Err(Error::ShapeMismatch {
                what: "training class width",
                expected: params.output_size(),
                found: targets.cols,
            });
        }

        Ok(Trainer {
            network,
            inputs,
            targets,
            optimizer,
            epochs_done: 0,
            diverged: false,
        })
    }

    /// Runs one epoch (forward, loss, backward, update) and returns the loss
    /// measured before the update.
    pub fn step(&mut self) -> f64 {
        let activations = self.network.forward(self.inputs);
        let loss = MseLoss::loss(&activations.output, self.targets);
        let grads = backward(
            self.inputs,
            self.targets,
            self.network.parameters(),
            &activations,
        );
        self.optimizer.step(self.network.parameters_mut(), &grads);
        self.epochs_done += 1;

        if !loss.is_finite() && !self.diverged {
            self.diverged = true;
            warn!(epoch = self.epochs_done, loss, "training loss is no longer finite");
        }
        loss
    }

    pub fn epochs_done(&self) -> usize {
        self.epochs_done
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Freezes the parameters; no further updates are possible.
    pub fn finish(self) -> TrainedNetwork {
        self.network.freeze()
    }
}
