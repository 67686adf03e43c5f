//! # Drachma
//!
//! A small batch trainer that learns to map free-form transaction
//! descriptions (e.g. "Bought milk for 40") to spending categories.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - TF-IDF feature extraction over a whitespace analysis chain
//! - Multinomial logistic regression trained by gradient descent
//! - Accuracy and confusion-matrix evaluation on a held-out split
//! - Binary artifact persistence with round-trip prediction fidelity

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod ml;
pub mod pipeline;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
