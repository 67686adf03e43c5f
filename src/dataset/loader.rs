//! CSV dataset loader.

use std::path::Path;

use crate::dataset::TransactionRecord;
use crate::error::{DrachmaError, Result};

/// Load labeled transactions from a CSV file.
///
/// The file must carry a header row with `text` and `category` columns.
/// Records are returned in file order.
///
/// # Errors
///
/// Returns [`DrachmaError::DatasetNotFound`] if the path does not exist,
/// and a fatal CSV error for malformed rows. Nothing is written on any
/// failure path.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DrachmaError::dataset_not_found(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DrachmaError::dataset_not_found(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TransactionRecord = row?;
        records.push(record);
    }

    Ok(records)
}
