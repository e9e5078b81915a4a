use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::encoding::one_hot::decode;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::network::TrainedNetwork;

/// One line of the per-sample evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    /// 1-based position in the test set.
    pub index: usize,
    pub features: Vec<f64>,
    pub predicted: usize,
    pub actual: usize,
}

impl SampleReport {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample {}: features = {:?}, predicted = {}, actual = {}",
            self.index, self.features, self.predicted, self.actual
        )
    }
}

/// Classification result over a held-out set.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub predicted_classes: Vec<usize>,
    pub actual_classes: Vec<usize>,
    /// Number of indices where predicted and actual classes differ.
    pub error_count: usize,
    /// `1 - error_count / N`.
    pub accuracy: f64,
    pub samples: Vec<SampleReport>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{sample}")?;
        }
        writeln!(f, "Accuracy: {}", self.accuracy)?;
        write!(f, "Errors: {}", self.error_count)
    }
}

/// Runs the frozen network once over `inputs` and scores its predictions
/// against the one-hot `targets`.
///
/// Shapes are checked before the forward pass: `inputs` must have the
/// network's input width and `targets` its output width, with one row each
/// per sample.
pub fn evaluate(network: &TrainedNetwork, inputs: &Matrix, targets: &Matrix) -> Result<Evaluation> {
    let params = network.parameters();
    if inputs.rows == 0 {
        return Err(Error::EmptyDataset("test set"));
    }
    if targets.rows != inputs.rows {
        return Err(Error::ShapeMismatch {
            what: "test target rows",
            expected: inputs.rows,
            found: targets.rows,
        });
    }
    if inputs.cols != params.input_size() {
        return Err(Error::ShapeMismatch {
            what: "test feature width",
            expected: params.input_size(),
            found: inputs.cols,
        });
    }
    if targets.cols != params.output_size() {
        return Err(Error::ShapeMismatch {
            what: "test class width",
            expected: params.output_size(),
            found: targets.cols,
        });
    }

    let scores = network.forward(inputs).output;
    let predicted_classes = decode(&scores);
    let actual_classes = decode(targets);

    let samples: Vec<SampleReport> = inputs
        .iter_rows()
        .zip(predicted_classes.iter().zip(&actual_classes))
        .enumerate()
        .map(|(i, (features, (&predicted, &actual)))| SampleReport {
            index: i + 1,
            features: features.to_vec(),
            predicted,
            actual,
        })
        .collect();

    let error_count = samples.iter().filter(|s| !s.is_correct()).count();
    let accuracy = 1.0 - error_count as f64 / inputs.rows as f64;
    info!(samples = inputs.rows, error_count, accuracy, "evaluation finished");

    Ok(Evaluation {
        predicted_classes,
        actual_classes,
        error_count,
        accuracy,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;
    use crate::network::{Network, Parameters};

    /// Hand-built network whose output column 1 tracks the sign of feature 0.
    fn sign_network() -> TrainedNetwork {
        let mut p = Parameters::init(2, 1, 2, 0);
        p.weights_input_hidden = Matrix::from_rows(vec![vec![10.0], vec![0.0]]).unwrap();
        p.weights_hidden_output = Matrix::from_rows(vec![vec![-10.0, 10.0]]).unwrap();
        p.bias_output = vec![5.0, -5.0];
        Network::from_parameters(p).freeze()
    }

    #[test]
    fn counts_mismatches_and_derives_accuracy() {
        let net = sign_network();
        let x = Matrix::from_rows(vec![vec![-1.0, 0.0], vec![1.0, 0.0], vec![2.0, 3.0], vec![-3.0, 1.0]]).unwrap();
        // Last sample is deliberately mislabelled.
        let y = encode(&[0, 1, 1, 1], 2).unwrap();
        let eval = evaluate(&net, &x, &y).unwrap();

        assert_eq!(eval.predicted_classes, vec![0, 1, 1, 0]);
        assert_eq!(eval.actual_classes, vec![0, 1, 1, 1]);
        assert_eq!(eval.error_count, 1);
        assert_eq!(eval.accuracy, 1.0 - 1.0 / 4.0);
        let mismatches = eval
            .predicted_classes
            .iter()
            .zip(&eval.actual_classes)
            .filter(|(p, a)| p != a)
            .count();
        assert_eq!(mismatches, eval.error_count);
    }

    #[test]
    fn samples_are_one_based_and_carry_features() {
        let net = sign_network();
        let x = Matrix::from_rows(vec![vec![-1.0, 0.25], vec![1.0, -0.5]]).unwrap();
        let y = encode(&[0, 1], 2).unwrap();
        let eval = evaluate(&net, &x, &y).unwrap();

        assert_eq!(eval.samples[0].index, 1);
        assert_eq!(eval.samples[1].features, vec![1.0, -0.5]);
        assert_eq!(
            eval.samples[0].to_string(),
            "Sample 1: features = [-1.0, 0.25], predicted = 0, actual = 0"
        );
        assert!(eval.to_string().ends_with("Accuracy: 1\nErrors: 0"));
    }

    #[test]
    fn evaluation_does_not_touch_parameters() {
        let net = sign_network();
        let before = net.parameters().clone();
        let x = Matrix::from_rows(vec![vec![0.5, 0.5]]).unwrap();
        let y = encode(&[1], 2).unwrap();
        evaluate(&net, &x, &y).unwrap();
        assert_eq!(net.parameters(), &before);
    }

    #[test]
    fn feature_width_mismatch_fails_fast() {
        let net = sign_network();
        let x = Matrix::zeros(2, 3);
        let y = encode(&[0, 1], 2).unwrap();
        assert!(matches!(
            evaluate(&net, &x, &y),
            Err(Error::ShapeMismatch { what: "test feature width", expected: 2, found: 3 })
        ));
    }

    #[test]
    fn class_width_mismatch_fails_fast() {
        let net = sign_network();
        let x = Matrix::zeros(2, 2);
        let y = encode(&[0, 2], 3).unwrap();
        assert!(matches!(
            evaluate(&net, &x, &y),
            Err(Error::ShapeMismatch { what: "test class width", .. })
        ));
    }
}
