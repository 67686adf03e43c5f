//! Command line argument parsing for the drachma CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drachma - a transaction category classifier trainer
#[derive(Parser, Debug, Clone)]
#[command(name = "drachma")]
#[command(about = "Train and query a transaction category classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DrachmaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DrachmaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier from a CSV dataset
    Train(TrainArgs),

    /// Classify text using persisted artifacts
    Predict(PredictArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the CSV dataset (columns: text, category)
    #[arg(long, value_name = "CSV_FILE", default_value = "transactions.csv")]
    pub dataset: PathBuf,

    /// Output path for the classifier artifact
    #[arg(long, value_name = "FILE", default_value = "classifier.bin")]
    pub classifier: PathBuf,

    /// Output path for the vectorizer artifact
    #[arg(long, value_name = "FILE", default_value = "vectorizer.bin")]
    pub vectorizer: PathBuf,

    /// Fraction of records held out for testing
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for the train/test split shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Gradient descent learning rate
    #[arg(long, default_value_t = 0.5)]
    pub learning_rate: f64,

    /// Gradient descent iteration budget
    #[arg(long, default_value_t = 2000)]
    pub max_iter: usize,

    /// Minimum number of documents a vocabulary term must appear in
    #[arg(long, default_value_t = 1)]
    pub min_df: usize,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Text to classify (one prediction per argument)
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Path to the classifier artifact
    #[arg(long, value_name = "FILE", default_value = "classifier.bin")]
    pub classifier: PathBuf,

    /// Path to the vectorizer artifact
    #[arg(long, value_name = "FILE", default_value = "vectorizer.bin")]
    pub vectorizer: PathBuf,
}
