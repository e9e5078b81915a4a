use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::train::train_config::TrainConfig;

/// Hyperparameters of a complete train-then-evaluate run.
///
/// `Default` is the reference configuration: 128 hidden units, learning rate
/// 0.02, 80000 epochs, seed 42, a progress report every 1000 epochs. Fields
/// missing from a JSON file keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub hidden_size: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    pub seed: u64,
    pub report_interval: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            hidden_size: 128,
            learning_rate: 0.02,
            epochs: 80_000,
            seed: 42,
            report_interval: 1000,
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hidden_size == 0 {
            return Err(Error::InvalidConfig("hidden layer width must be at least 1".into()));
        }
        self.train_config().validate()
    }

    /// Training-loop settings derived from this run, without a progress channel.
    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.learning_rate).with_report_interval(self.report_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_configuration() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.hidden_size, 128);
        assert_eq!(cfg.learning_rate, 0.02);
        assert_eq!(cfg.epochs, 80_000);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.report_interval, 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: RunConfig = serde_json::from_str(r#"{ "epochs": 5000, "learning_rate": 0.1 }"#).unwrap();
        assert_eq!(cfg.epochs, 5000);
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.hidden_size, 128);
    }

    #[test]
    fn zero_hidden_width_is_invalid() {
        let cfg = RunConfig { hidden_size: 0, ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn load_json_reads_file() {
        let path = std::env::temp_dir().join(format!("sigmoid-mlp-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "hidden_size": 16, "seed": 7 }"#).unwrap();
        let cfg = RunConfig::load_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((cfg.hidden_size, cfg.seed), (16, 7));
    }
}
