//! Accuracy and confusion-matrix evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DrachmaError, Result};

/// Count matrix of (true category, predicted category) pairs.
///
/// Rows are true labels, columns predicted labels, both indexed by the
/// sorted union of labels observed in either sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Sorted labels indexing the matrix.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Count for a (true label, predicted label) pair.
    ///
    /// Returns zero for labels the matrix does not know.
    pub fn count(&self, true_label: &str, predicted_label: &str) -> u64 {
        let row = self.labels.iter().position(|l| l == true_label);
        let col = self.labels.iter().position(|l| l == predicted_label);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Raw count rows, ordered like [`labels`](ConfusionMatrix::labels).
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(|l| l.len())
            .chain(
                self.counts
                    .iter()
                    .flatten()
                    .map(|c| c.to_string().len()),
            )
            .max()
            .unwrap_or(1)
            .max(4);

        write!(f, "{:width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (row, label) in self.counts.iter().zip(self.labels.iter()) {
            write!(f, "{label:width$}")?;
            for count in row {
                write!(f, " {count:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Result of evaluating predictions against true labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Fraction of predictions equal to the true label, in [0, 1].
    pub accuracy: f64,
    /// Confusion matrix over the observed label union.
    pub confusion: ConfusionMatrix,
}

/// Evaluate predicted labels against true labels.
///
/// Both sequences must have equal length and the same order. Pure and
/// deterministic.
pub fn evaluate(true_labels: &[String], predicted_labels: &[String]) -> Result<Evaluation> {
    if true_labels.len() != predicted_labels.len() {
        return Err(DrachmaError::invalid_argument(format!(
            "label sequences differ in length: {} vs {}",
            true_labels.len(),
            predicted_labels.len()
        )));
    }
    if true_labels.is_empty() {
        return Err(DrachmaError::invalid_argument(
            "cannot evaluate an empty label sequence",
        ));
    }

    // Sorted union of labels seen on either side
    let mut labels: Vec<String> = true_labels
        .iter()
        .chain(predicted_labels.iter())
        .cloned()
        .collect();
    labels.sort();
    labels.dedup();

    let index_of = |label: &String| -> usize {
        labels.binary_search(label).expect("label came from the union")
    };

    let mut counts = vec![vec![0u64; labels.len()]; labels.len()];
    let mut correct = 0usize;
    for (truth, prediction) in true_labels.iter().zip(predicted_labels.iter()) {
        counts[index_of(truth)][index_of(prediction)] += 1;
        if truth == prediction {
            correct += 1;
        }
    }

    Ok(Evaluation {
        accuracy: correct as f64 / true_labels.len() as f64,
        confusion: ConfusionMatrix { labels, counts },
    })
}
