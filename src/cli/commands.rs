//! Command implementations for the drachma CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ml::{LogisticRegression, TfIdfVectorizer};
use crate::pipeline::{PipelineConfig, TrainingPipeline};
use crate::storage::load_artifact;
use crate::{analysis::normalize, ml::VectorizerConfig};

/// Execute a CLI command.
pub fn execute_command(args: DrachmaArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
    }
}

/// Train a classifier and persist its artifacts.
fn train(args: TrainArgs, cli_args: &DrachmaArgs) -> Result<()> {
    if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
        println!("Training on: {}", args.dataset.display());
    }

    let config = PipelineConfig {
        dataset_path: args.dataset,
        classifier_path: args.classifier,
        vectorizer_path: args.vectorizer,
        test_fraction: args.test_fraction,
        seed: args.seed,
        learning_rate: args.learning_rate,
        max_iter: args.max_iter,
        vectorizer: VectorizerConfig {
            min_df: args.min_df,
            ..VectorizerConfig::default()
        },
    };

    let report = TrainingPipeline::new(config).run()?;
    output_training_report(&report, cli_args)
}

/// Classify ad-hoc text with persisted artifacts.
fn predict(args: PredictArgs, cli_args: &DrachmaArgs) -> Result<()> {
    let vectorizer: TfIdfVectorizer = load_artifact(&args.vectorizer)?;
    let classifier: LogisticRegression = load_artifact(&args.classifier)?;

    let mut predictions = Vec::with_capacity(args.text.len());
    for input in &args.text {
        let features = vectorizer.transform(&normalize(input));
        let predicted = classifier.predict_one(&features)?;
        predictions.push((input.clone(), predicted));
    }

    output_predictions(&predictions, cli_args)
}
