use crate::activation::sigmoid::sigmoid_derivative_from_output;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Activations;
use crate::network::params::Parameters;

/// Per-parameter gradients, shaped like [`Parameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weights_input_hidden: Matrix,
    pub bias_hidden: Vec<f64>,
    pub weights_hidden_output: Matrix,
    pub bias_output: Vec<f64>,
}

/// Backward pass for one full batch.
///
/// Given the activations from `forward(inputs, params)`:
///
/// ```text
/// output_error = output - targets
/// hidden_error = (output_error · W_hoᵀ) ⊙ hidden ⊙ (1 - hidden)
/// dW_ho = hiddenᵀ · output_error / N      db_o = colsum(output_error) / N
/// dW_ih = inputsᵀ · hidden_error / N      db_h = colsum(hidden_error) / N
/// ```
///
/// The output error carries no sigmoid factor, so these are the exact
/// gradients of the mean binary cross-entropy of the sigmoid outputs. The
/// reported loss is still the halved MSE.
pub fn backward(
    inputs: &Matrix,
    targets: &Matrix,
    params: &Parameters,
    activations: &Activations,
) -> Gradients {
    let inv_n = 1.0 / inputs.rows as f64;

    let output_error = MseLoss::derivative(&activations.output, targets);
    let hidden_error = output_error
        .dot(&params.weights_hidden_output.transpose())
        .hadamard(&activations.hidden.map(sigmoid_derivative_from_output));

    Gradients {
        weights_hidden_output: activations.hidden.transpose().dot(&output_error).scale(inv_n),
        bias_output: output_error.column_sums().into_iter().map(|s| s * inv_n).collect(),
        weights_input_hidden: inputs.transpose().dot(&hidden_error).scale(inv_n),
        bias_hidden: hidden_error.column_sums().into_iter().map(|s| s * inv_n).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::network::forward;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Objective whose exact gradient `backward` computes.
    fn mean_cross_entropy(inputs: &Matrix, targets: &Matrix, params: &Parameters) -> f64 {
        let out = forward(inputs, params).output;
        let total: f64 = out
            .as_slice()
            .iter()
            .zip(targets.as_slice())
            .map(|(p, t)| -(t * p.ln() + (1.0 - t) * (1.0 - p).ln()))
            .sum();
        total / inputs.rows as f64
    }

    fn small_problem() -> (Matrix, Matrix, Parameters) {
        let mut rng = StdRng::seed_from_u64(11);
        let inputs = Matrix::from_vec(5, 3, (0..15).map(|_| rng.gen_range(-1.0..1.0)).collect());
        let targets = crate::encoding::encode(&[0, 1, 1, 0, 1], 2).unwrap();
        let mut params = Parameters::init(3, 4, 2, 17);
        params.bias_hidden = vec![0.1, -0.2, 0.05, 0.3];
        params.bias_output = vec![-0.1, 0.2];
        (inputs, targets, params)
    }

    #[test]
    fn analytic_gradients_match_central_differences() {
        let (inputs, targets, params) = small_problem();
        let grads = backward(&inputs, &targets, &params, &forward(&inputs, &params));
        let h = 1e-5;
        let tol = 1e-4;

        for i in 0..params.weights_input_hidden.rows {
            for j in 0..params.weights_input_hidden.cols {
                let w = params.weights_input_hidden.get(i, j);
                let mut plus = params.clone();
                plus.weights_input_hidden.set(i, j, w + h);
                let mut minus = params.clone();
                minus.weights_input_hidden.set(i, j, w - h);
                let numeric = (mean_cross_entropy(&inputs, &targets, &plus)
                    - mean_cross_entropy(&inputs, &targets, &minus))
                    / (2.0 * h);
                let analytic = grads.weights_input_hidden.get(i, j);
                assert!((numeric - analytic).abs() < tol, "dW_ih[{i}][{j}]: {numeric} vs {analytic}");
            }
        }

        for i in 0..params.weights_hidden_output.rows {
            for j in 0..params.weights_hidden_output.cols {
                let w = params.weights_hidden_output.get(i, j);
                let mut plus = params.clone();
                plus.weights_hidden_output.set(i, j, w + h);
                let mut minus = params.clone();
                minus.weights_hidden_output.set(i, j, w - h);
                let numeric = (mean_cross_entropy(&inputs, &targets, &plus)
                    - mean_cross_entropy(&inputs, &targets, &minus))
                    / (2.0 * h);
                let analytic = grads.weights_hidden_output.get(i, j);
                assert!((numeric - analytic).abs() < tol, "dW_ho[{i}][{j}]: {numeric} vs {analytic}");
            }
        }
    }

    #[test]
    fn bias_gradients_match_central_differences() {
        let (inputs, targets, params) = small_problem();
        let grads = backward(&inputs, &targets, &params, &forward(&inputs, &params));
        let h = 1e-5;

        for k in 0..params.bias_hidden.len() {
            let mut plus = params.clone();
            plus.bias_hidden[k] += h;
            let mut minus = params.clone();
            minus.bias_hidden[k] -= h;
            let numeric = (mean_cross_entropy(&inputs, &targets, &plus)
                - mean_cross_entropy(&inputs, &targets, &minus))
                / (2.0 * h);
            assert!((numeric - grads.bias_hidden[k]).abs() < 1e-4);
        }
        for k in 0..params.bias_output.len() {
            let mut plus = params.clone();
            plus.bias_output[k] += h;
            let mut minus = params.clone();
            minus.bias_output[k] -= h;
            let numeric = (mean_cross_entropy(&inputs, &targets, &plus)
                - mean_cross_entropy(&inputs, &targets, &minus))
                / (2.0 * h);
            assert!((numeric - grads.bias_output[k]).abs() < 1e-4);
        }
    }

    #[test]
    fn gradients_keep_parameter_shapes() {
        let (inputs, targets, params) = small_problem();
        let g = backward(&inputs, &targets, &params, &forward(&inputs, &params));
        assert_eq!((g.weights_input_hidden.rows, g.weights_input_hidden.cols), (3, 4));
        assert_eq!((g.weights_hidden_output.rows, g.weights_hidden_output.cols), (4, 2));
        assert_eq!(g.bias_hidden.len(), 4);
        assert_eq!(g.bias_output.len(), 2);
    }
}
