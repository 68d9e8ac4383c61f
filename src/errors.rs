use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid time {0:?}: expected zero-padded HH:MM")]
    InvalidTime(String),

    #[error("minutes out of range: {0}")]
    MinutesOutOfRange(u32),

    #[error("dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("missing column {0:?} in dataset header")]
    MissingColumn(String),

    #[error("sort worker failed: {0}")]
    SortWorker(String),
}
