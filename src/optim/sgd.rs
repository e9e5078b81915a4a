use crate::math::matrix::sub_scaled_assign;
use crate::network::params::Parameters;
use crate::train::backprop::Gradients;

/// Plain full-batch gradient descent: `P -= learning_rate * dP`.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to all four parameter tensors.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) {
        let lr = self.learning_rate;
        params.weights_input_hidden.sub_scaled_assign(&grads.weights_input_hidden, lr);
        sub_scaled_assign(&mut params.bias_hidden, &grads.bias_hidden, lr);
        params.weights_hidden_output.sub_scaled_assign(&grads.weights_hidden_output, lr);
        sub_scaled_assign(&mut params.bias_output, &grads.bias_output, lr);
    }
}
