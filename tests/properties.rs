use proptest::prelude::*;

use sigmoid_mlp::{decode, encode, evaluate, forward, Matrix, Network, Parameters};

fn bounded_inputs(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-2.0f64..2.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data))
}

proptest! {
    #[test]
    fn activations_stay_strictly_inside_unit_interval(
        x in (1usize..8).prop_flat_map(|n| bounded_inputs(n, 3)),
        seed in any::<u64>(),
    ) {
        let params = Parameters::init(3, 4, 2, seed);
        let act = forward(&x, &params);
        for &v in act.hidden.as_slice().iter().chain(act.output.as_slice()) {
            prop_assert!(v > 0.0 && v < 1.0, "activation {} escaped (0, 1)", v);
        }
    }

    #[test]
    fn encode_then_decode_recovers_every_label(
        (c, l) in (1usize..32).prop_flat_map(|c| (Just(c), 0..c)),
    ) {
        prop_assert_eq!(decode(&encode(&[l], c).unwrap())[0], l);
    }

    #[test]
    fn accuracy_and_error_count_agree(
        labels in prop::collection::vec(0usize..3, 1..20),
        seed in any::<u64>(),
    ) {
        let n = labels.len();
        let x = Matrix::from_vec(n, 2, (0..2 * n).map(|i| (i as f64 * 0.37).sin()).collect());
        let targets = encode(&labels, 3).unwrap();
        let trained = Network::new(2, 3, 3, seed).freeze();

        let eval = evaluate(&trained, &x, &targets).unwrap();
        let mismatches = eval
            .predicted_classes
            .iter()
            .zip(&eval.actual_classes)
            .filter(|(p, a)| p != a)
            .count();
        prop_assert_eq!(eval.error_count, mismatches);
        prop_assert_eq!(eval.accuracy, 1.0 - eval.error_count as f64 / n as f64);
        prop_assert_eq!(&eval.actual_classes, &labels);
    }
}
