//! Text analysis for transaction descriptions.
//!
//! The analysis chain is deliberately small: a normalization pass that
//! canonicalizes raw descriptions, followed by whitespace tokenization.
//! Every text that reaches the vectorizer or the classifier goes through
//! the same chain, at training time and at inference time.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::normalize;
pub use tokenizer::tokenize;
