pub mod backprop;
pub mod epoch_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use backprop::{backward, Gradients};
pub use epoch_stats::EpochStats;
pub use loop_fn::{train_loop, TrainingOutcome};
pub use train_config::TrainConfig;
pub use trainer::Trainer;
