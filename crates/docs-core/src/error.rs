use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("invalid config: {0}")]
    Config(String),

    #[error("reference data: {0}")]
    Data(String),

    #[error("selection: {0}")]
    Selection(String),

    #[error("unknown chain: {0}")]
    UnknownChain(String),

    #[error("wallet: {0}")]
    Wallet(#[from] wallet_bridge::BridgeError),
}

impl From<serde_json::Error> for DocsError {
    fn from(e: serde_json::Error) -> Self {
        DocsError::Config(e.to_string())
    }
}

impl From<reference_data::DataError> for DocsError {
    fn from(e: reference_data::DataError) -> Self {
        DocsError::Data(e.to_string())
    }
}

impl From<selection_engine::SelectionError> for DocsError {
    fn from(e: selection_engine::SelectionError) -> Self {
        DocsError::Selection(e.to_string())
    }
}
