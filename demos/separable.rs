use sigmoid_mlp::data::separable_blobs;
use sigmoid_mlp::{run, RunConfig};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let train = separable_blobs(50, 1);
    let test = separable_blobs(10, 2);
    let config = RunConfig {
        hidden_size: 16,
        learning_rate: 0.1,
        epochs: 5000,
        ..RunConfig::default()
    };

    match run(&train, &test, &config, None) {
        Ok(outcome) => println!("{}", outcome.evaluation),
        Err(e) => eprintln!("run failed: {e}"),
    }
}
