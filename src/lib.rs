pub mod math;
pub mod activation;
pub mod encoding;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod eval;
pub mod data;
pub mod config;
pub mod error;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use encoding::one_hot::{decode, encode, OneHotEncoder};
pub use network::network::{forward, Activations, Network, TrainedNetwork};
pub use network::params::Parameters;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, EpochStats, TrainConfig, Trainer, TrainingOutcome};
pub use eval::evaluator::{evaluate, Evaluation, SampleReport};
pub use data::table::Dataset;
pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{run, RunOutcome};
