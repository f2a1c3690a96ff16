//! Question-pool loading errors.

use thiserror::Error;

/// Failure to obtain the question pool.
///
/// None of these are fatal: the session logs them and continues with an
/// empty pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PoolError {
    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question bank is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
