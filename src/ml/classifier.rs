//! Multinomial logistic regression over TF-IDF features.

use serde::{Deserialize, Serialize};

use crate::error::{DrachmaError, Result};

/// Multinomial logistic regression classifier.
///
/// Learns one weight vector and bias per category by minimizing the
/// softmax cross-entropy loss with full-batch gradient descent. Weights
/// are zero-initialized, so fitting is deterministic for a fixed input.
/// The model is immutable after fitting; there is no online update.
///
/// Prediction takes the category with the highest probability. Ties go
/// to the lowest class index, and class indices are assigned from the
/// sorted unique label set, so an exact tie resolves to the
/// lexicographically smallest label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Per-class weight vectors, indexed [class][feature].
    weights: Vec<Vec<f64>>,
    /// Per-class bias terms.
    bias: Vec<f64>,
    /// Sorted category labels; position = class index.
    labels: Vec<String>,
    /// Learning rate for gradient descent.
    learning_rate: f64,
    /// Maximum number of iterations.
    max_iter: usize,
    /// Convergence tolerance on the gradient.
    tol: f64,
    /// Whether the last fit converged within the iteration budget.
    converged: bool,
}

impl LogisticRegression {
    /// Create a new classifier with default hyperparameters.
    pub fn new() -> Self {
        LogisticRegression {
            weights: Vec::new(),
            bias: Vec::new(),
            labels: Vec::new(),
            learning_rate: 0.5,
            max_iter: 2000,
            tol: 1e-4,
            converged: false,
        }
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sorted category labels known to the model.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the last fit converged within the iteration budget.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Fit the model on training feature vectors and their labels.
    ///
    /// Failing to converge within the iteration budget is not fatal: a
    /// warning is logged and the best-effort weights are kept.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[String]) -> Result<()> {
        if x.is_empty() {
            return Err(DrachmaError::model("cannot fit with zero samples"));
        }
        if x.len() != y.len() {
            return Err(DrachmaError::model(format!(
                "feature/label count mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }

        let n_features = x[0].len();
        if x.iter().any(|row| row.len() != n_features) {
            return Err(DrachmaError::model(
                "feature vectors must all have the same dimension",
            ));
        }

        // Class index = position in the sorted unique label set
        let mut labels: Vec<String> = y.to_vec();
        labels.sort();
        labels.dedup();
        let n_classes = labels.len();

        let class_of = |label: &String| -> usize {
            labels.binary_search(label).expect("label came from y")
        };
        let targets: Vec<usize> = y.iter().map(class_of).collect();

        let mut weights = vec![vec![0.0; n_features]; n_classes];
        let mut bias = vec![0.0; n_classes];
        let n_samples = x.len() as f64;
        let mut converged = false;

        for iteration in 0..self.max_iter {
            let mut weight_grad = vec![vec![0.0; n_features]; n_classes];
            let mut bias_grad = vec![0.0; n_classes];

            for (row, &target) in x.iter().zip(targets.iter()) {
                let probabilities = Self::softmax_scores(&weights, &bias, row);
                for (class, &p) in probabilities.iter().enumerate() {
                    let error = if class == target { p - 1.0 } else { p };
                    bias_grad[class] += error;
                    for (j, &value) in row.iter().enumerate() {
                        weight_grad[class][j] += error * value;
                    }
                }
            }

            let mut max_grad: f64 = 0.0;
            for class in 0..n_classes {
                bias_grad[class] /= n_samples;
                max_grad = max_grad.max(bias_grad[class].abs());
                bias[class] -= self.learning_rate * bias_grad[class];
                for j in 0..n_features {
                    weight_grad[class][j] /= n_samples;
                    max_grad = max_grad.max(weight_grad[class][j].abs());
                    weights[class][j] -= self.learning_rate * weight_grad[class][j];
                }
            }

            if iteration % 100 == 0 {
                log::debug!("iteration {iteration}: max gradient {max_grad:.6}");
            }

            if max_grad < self.tol {
                converged = true;
                log::debug!("converged after {} iterations", iteration + 1);
                break;
            }
        }

        if !converged {
            log::warn!(
                "solver did not converge within {} iterations; keeping best-effort weights",
                self.max_iter
            );
        }

        self.weights = weights;
        self.bias = bias;
        self.labels = labels;
        self.converged = converged;

        Ok(())
    }

    /// Predict per-class probabilities for each feature vector.
    ///
    /// Rows are ordered like [`labels`](LogisticRegression::labels).
    pub fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        if !self.is_fitted() {
            return Err(DrachmaError::model("model is not fitted"));
        }

        Ok(x.iter()
            .map(|row| Self::softmax_scores(&self.weights, &self.bias, row))
            .collect())
    }

    /// Predict the most likely category label for each feature vector.
    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<String>> {
        let probabilities = self.predict_proba(x)?;

        Ok(probabilities
            .iter()
            .map(|row| {
                // Strict comparison keeps the lowest index on ties
                let mut best = 0;
                for (class, &p) in row.iter().enumerate() {
                    if p > row[best] {
                        best = class;
                    }
                }
                self.labels[best].clone()
            })
            .collect())
    }

    /// Predict the category label for a single feature vector.
    pub fn predict_one(&self, features: &[f64]) -> Result<String> {
        let rows = [features.to_vec()];
        let mut predictions = self.predict(&rows)?;
        Ok(predictions.remove(0))
    }

    /// Softmax over the per-class linear scores for one sample.
    fn softmax_scores(weights: &[Vec<f64>], bias: &[f64], row: &[f64]) -> Vec<f64> {
        let mut scores: Vec<f64> = weights
            .iter()
            .zip(bias.iter())
            .map(|(w, &b)| {
                b + w
                    .iter()
                    .zip(row.iter())
                    .map(|(&wj, &xj)| wj * xj)
                    .sum::<f64>()
            })
            .collect();

        // Subtract the max score for numerical stability
        let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for score in &mut scores {
            *score = (*score - max_score).exp();
        }
        let total: f64 = scores.iter().sum();
        for score in &mut scores {
            *score /= total;
        }

        scores
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Vec<Vec<f64>>, Vec<String>) {
        let x = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.1, 0.9, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.1, 0.9],
        ];
        let y = vec![
            "groceries".to_string(),
            "groceries".to_string(),
            "rent".to_string(),
            "rent".to_string(),
            "income".to_string(),
            "income".to_string(),
        ];
        (x, y)
    }

    #[test]
    fn test_fit_and_predict_separable() {
        let (x, y) = separable_data();
        let mut model = LogisticRegression::new()
            .with_learning_rate(1.0)
            .with_max_iter(2000);
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted());
        let predictions = model.predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_labels_are_sorted() {
        let (x, y) = separable_data();
        let mut model = LogisticRegression::new();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.labels(), &["groceries", "income", "rent"]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (x, y) = separable_data();
        let mut model = LogisticRegression::new();
        model.fit(&x, &y).unwrap();

        for row in model.predict_proba(&x).unwrap() {
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = separable_data();
        let mut a = LogisticRegression::new();
        let mut b = LogisticRegression::new();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();

        assert_eq!(a.predict_proba(&x).unwrap(), b.predict_proba(&x).unwrap());
    }

    #[test]
    fn test_tie_breaks_to_smallest_label() {
        // Perfectly symmetric training data keeps the class scores equal
        // for a symmetric input, so the tie-break rule decides.
        let x = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let y = vec!["b".to_string(), "a".to_string()];
        let mut model = LogisticRegression::new().with_max_iter(500);
        model.fit(&x, &y).unwrap();

        let prediction = model.predict_one(&[0.0, 0.0]).unwrap();
        assert_eq!(prediction, "a");
    }

    #[test]
    fn test_predict_unfitted_fails() {
        let model = LogisticRegression::new();
        assert!(model.predict(&[vec![1.0]]).is_err());
    }

    #[test]
    fn test_fit_mismatched_inputs() {
        let mut model = LogisticRegression::new();
        let result = model.fit(&[vec![1.0], vec![2.0]], &["a".to_string()]);
        assert!(result.is_err());

        let result = model.fit(&[], &[]);
        assert!(result.is_err());

        let result = model.fit(
            &[vec![1.0], vec![1.0, 2.0]],
            &["a".to_string(), "b".to_string()],
        );
        assert!(result.is_err());
    }
}
