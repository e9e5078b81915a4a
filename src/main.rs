use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigmoid_mlp::{Dataset, RunConfig};

/// Train a one-hidden-layer sigmoid classifier on TRAIN and evaluate it on TEST.
///
/// Both tables are whitespace-delimited; the last column is the integer class
/// label. Progress is logged every `--report-interval` epochs (set RUST_LOG to
/// change verbosity).
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Training table
    #[arg(value_name = "TRAIN")]
    train: PathBuf,
    /// Held-out test table
    #[arg(value_name = "TEST")]
    test: PathBuf,
    /// JSON file with a run configuration, applied before the flags below
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
    /// Hidden layer width
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    /// Gradient-descent step size
    #[arg(long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    /// Number of full-batch epochs
    #[arg(short, long, value_name = "INT")]
    epochs: Option<usize>,
    /// Seed for weight initialization
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Epochs between progress reports
    #[arg(long, value_name = "INT")]
    report_interval: Option<usize>,
    /// Print the evaluation as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::load_json(path)
                .with_context(|| format!("failed to load config {path}"))?,
            None => RunConfig::default(),
        };
        if let Some(hidden) = self.hidden {
            cfg.hidden_size = hidden;
        }
        if let Some(lr) = self.learning_rate {
            cfg.learning_rate = lr;
        }
        if let Some(epochs) = self.epochs {
            cfg.epochs = epochs;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(interval) = self.report_interval {
            cfg.report_interval = interval;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.run_config()?;

    let train = Dataset::load(&cli.train)
        .with_context(|| format!("failed to load training table {}", cli.train.display()))?;
    let test = Dataset::load(&cli.test)
        .with_context(|| format!("failed to load test table {}", cli.test.display()))?;

    let outcome = sigmoid_mlp::run(&train, &test, &config, None)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.evaluation);
    }
    Ok(())
}
