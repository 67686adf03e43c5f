//! Feature extraction, classification, and evaluation.

pub mod classifier;
pub mod evaluation;
pub mod vectorizer;

pub use classifier::LogisticRegression;
pub use evaluation::{ConfusionMatrix, Evaluation, evaluate};
pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};
