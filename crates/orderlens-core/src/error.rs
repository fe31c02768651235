//! Error types for OrderLens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
