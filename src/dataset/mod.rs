//! Dataset loading and splitting.

pub mod loader;
pub mod splitter;

use serde::{Deserialize, Serialize};

/// A single labeled transaction, one per dataset row.
///
/// Records are immutable once loaded; missing CSV values deserialize as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Free-form transaction description.
    #[serde(default)]
    pub text: String,
    /// Spending category label.
    #[serde(default)]
    pub category: String,
}

impl TransactionRecord {
    /// Create a new transaction record.
    pub fn new<S: Into<String>, T: Into<String>>(text: S, category: T) -> Self {
        TransactionRecord {
            text: text.into(),
            category: category.into(),
        }
    }
}
