use thiserror::Error;

/// Reference data errors.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("malformed table {table}: {reason}")]
    MalformedTable { table: &'static str, reason: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
