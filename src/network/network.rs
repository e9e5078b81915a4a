use crate::activation::sigmoid::sigmoid;
use crate::math::matrix::Matrix;
use crate::network::params::Parameters;

/// Activations produced by one forward pass over a batch.
#[derive(Debug, Clone)]
pub struct Activations {
    /// N × hidden
    pub hidden: Matrix,
    /// N × output
    pub output: Matrix,
}

/// Forward pass over a whole batch `x` (N × input).
///
/// `hidden = sigmoid(x · W_ih + b_h)`, `output = sigmoid(hidden · W_ho + b_o)`,
/// with each bias added to every row. Training and evaluation both go through
/// this function.
pub fn forward(x: &Matrix, params: &Parameters) -> Activations {
    let hidden = x
        .dot(&params.weights_input_hidden)
        .add_row_broadcast(&params.bias_hidden)
        .map(sigmoid);
    let output = hidden
        .dot(&params.weights_hidden_output)
        .add_row_broadcast(&params.bias_output)
        .map(sigmoid);
    Activations { hidden, output }
}

/// A network whose parameters may still be updated by a trainer.
#[derive(Debug, Clone)]
pub struct Network {
    params: Parameters,
}

impl Network {
    /// Builds an input → hidden → output network with seeded initialization.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, seed: u64) -> Network {
        Network {
            params: Parameters::init(input_size, hidden_size, output_size, seed),
        }
    }

    pub fn from_parameters(params: Parameters) -> Network {
        Network { params }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    pub fn forward(&self, x: &Matrix) -> Activations {
        forward(x, &self.params)
    }

    /// Ends training; the returned network can no longer be mutated.
    pub fn freeze(self) -> TrainedNetwork {
        TrainedNetwork { params: self.params }
    }
}

/// A network whose parameters are frozen. Only read access is offered.
#[derive(Debug, Clone)]
pub struct TrainedNetwork {
    params: Parameters,
}

impl TrainedNetwork {
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn forward(&self, x: &Matrix) -> Activations {
        forward(x, &self.params)
    }

    /// Hands the parameters back for another explicit round of training.
    pub fn into_network(self) -> Network {
        Network { params: self.params }
    }
}
