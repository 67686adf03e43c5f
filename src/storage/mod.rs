//! Binary artifact persistence.

pub mod artifact;

pub use artifact::{load_artifact, save_artifact};
