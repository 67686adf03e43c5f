//! End-to-end training pipeline.
//!
//! One invocation runs the whole sequence: load the CSV, normalize the
//! descriptions, split into train/test, fit the TF-IDF vectorizer on the
//! training split only, train the classifier, evaluate on the held-out
//! split, persist both artifacts, and run the smoke-test predictions.
//! The stages run strictly in that order with no persistent state beyond
//! the in-memory handoff between them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analysis::normalize;
use crate::dataset::loader::load_transactions;
use crate::dataset::splitter::train_test_split;
use crate::error::Result;
use crate::ml::evaluation::{ConfusionMatrix, evaluate};
use crate::ml::{LogisticRegression, TfIdfVectorizer, VectorizerConfig};
use crate::storage::save_artifact;

/// Fixed sample inputs echoed through the trained model after training.
pub const SMOKE_INPUTS: [&str; 10] = [
    "Rice 500",
    "Rent paid",
    "Sold milk",
    "Petrol",
    "milk 40",
    "rice 200",
    "rent 3000",
    "Bought milk for 40",
    "Paid shop rent",
    "Sold vegetables",
];

/// Configuration for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the input CSV dataset.
    pub dataset_path: PathBuf,
    /// Output path for the classifier artifact.
    pub classifier_path: PathBuf,
    /// Output path for the vectorizer artifact.
    pub vectorizer_path: PathBuf,
    /// Fraction of records held out for testing.
    pub test_fraction: f64,
    /// Seed for the split shuffle.
    pub seed: u64,
    /// Classifier learning rate.
    pub learning_rate: f64,
    /// Classifier iteration budget.
    pub max_iter: usize,
    /// Vocabulary construction settings.
    pub vectorizer: VectorizerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            dataset_path: PathBuf::from("transactions.csv"),
            classifier_path: PathBuf::from("classifier.bin"),
            vectorizer_path: PathBuf::from("vectorizer.bin"),
            test_fraction: 0.2,
            seed: 42,
            learning_rate: 0.5,
            max_iter: 2000,
            vectorizer: VectorizerConfig::default(),
        }
    }
}

/// One smoke-test echo line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokePrediction {
    pub input: String,
    pub predicted: String,
}

/// Result of a completed training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub total_records: usize,
    pub train_records: usize,
    pub test_records: usize,
    pub vocabulary_size: usize,
    pub converged: bool,
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub smoke_predictions: Vec<SmokePrediction>,
}

/// The batch training pipeline.
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    config: PipelineConfig,
}

impl TrainingPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        TrainingPipeline { config }
    }

    /// Run the pipeline end to end and return the training report.
    ///
    /// Fails fast on a missing dataset before any artifact is written;
    /// artifact write failures are fatal. A classifier that does not
    /// converge only logs a warning and the run continues.
    pub fn run(&self) -> Result<TrainingReport> {
        // Step 1: load the dataset, preserving file order
        log::info!(
            "loading dataset from {}",
            self.config.dataset_path.display()
        );
        let records = load_transactions(&self.config.dataset_path)?;
        let total_records = records.len();
        log::info!("loaded {total_records} transactions");

        // Step 2: normalize descriptions; the cleaned text rides along
        // with its label from here on
        let cleaned: Vec<(String, String)> = records
            .into_iter()
            .map(|r| (normalize(&r.text), r.category))
            .collect();

        // Step 3: split into train/test
        let (train, test) =
            train_test_split(cleaned, self.config.test_fraction, self.config.seed);
        log::info!("split into {} train / {} test", train.len(), test.len());

        let (train_texts, train_labels): (Vec<String>, Vec<String>) = train.into_iter().unzip();
        let (test_texts, test_labels): (Vec<String>, Vec<String>) = test.into_iter().unzip();

        // Step 4: fit the vectorizer on the training split only, then
        // transform both splits (the test split is never fitted on)
        let mut vectorizer = TfIdfVectorizer::new(self.config.vectorizer.clone());
        vectorizer.fit(&train_texts)?;
        log::info!("fitted vocabulary of {} terms", vectorizer.vocabulary_size());
        let train_features = vectorizer.transform_batch(&train_texts);
        let test_features = vectorizer.transform_batch(&test_texts);

        // Step 5: train the classifier
        let mut classifier = LogisticRegression::new()
            .with_learning_rate(self.config.learning_rate)
            .with_max_iter(self.config.max_iter);
        classifier.fit(&train_features, &train_labels)?;
        log::info!(
            "trained classifier over {} categories (converged: {})",
            classifier.labels().len(),
            classifier.converged()
        );

        // Step 6: evaluate on the held-out split
        let predictions = classifier.predict(&test_features)?;
        let evaluation = evaluate(&test_labels, &predictions)?;
        log::info!("held-out accuracy {:.2}", evaluation.accuracy);

        // Step 7: persist both artifacts
        save_artifact(&self.config.classifier_path, &classifier)?;
        save_artifact(&self.config.vectorizer_path, &vectorizer)?;
        log::info!(
            "saved {} and {}",
            self.config.classifier_path.display(),
            self.config.vectorizer_path.display()
        );

        // Step 8: smoke-test predictions over the fixed sample inputs
        let mut smoke_predictions = Vec::with_capacity(SMOKE_INPUTS.len());
        for input in SMOKE_INPUTS {
            let features = vectorizer.transform(&normalize(input));
            let predicted = classifier.predict_one(&features)?;
            smoke_predictions.push(SmokePrediction {
                input: input.to_string(),
                predicted,
            });
        }

        Ok(TrainingReport {
            total_records,
            train_records: train_texts.len(),
            test_records: test_texts.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            converged: classifier.converged(),
            accuracy: evaluation.accuracy,
            confusion: evaluation.confusion,
            smoke_predictions,
        })
    }
}
