use thiserror::Error;

use crate::provider::ProviderError;

/// Wallet bridge errors. None of these are fatal to the page.
#[derive(Debug, Error, PartialEq)]
pub enum BridgeError {
    #[error("{method} failed: {source}")]
    Provider {
        method: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("chain {0} has no numeric chain id")]
    MissingChainId(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("no network definition for chain id {0}")]
    NoNetworkDefinition(u64),
}

impl BridgeError {
    pub(crate) fn provider(method: &'static str, source: ProviderError) -> Self {
        BridgeError::Provider { method, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_provider_error() {
        let err = BridgeError::provider(
            "wallet_switchEthereumChain",
            ProviderError::new(4001, "User rejected the request."),
        );
        assert_eq!(
            err.to_string(),
            "wallet_switchEthereumChain failed: provider error 4001: User rejected the request."
        );
    }

    #[test]
    fn display_missing_chain_id() {
        let err = BridgeError::MissingChainId("osmosis".into());
        assert_eq!(err.to_string(), "chain osmosis has no numeric chain id");
    }

    #[test]
    fn display_invalid_chain_id() {
        let err = BridgeError::InvalidChainId("0xzz".into());
        assert_eq!(err.to_string(), "invalid chain id: 0xzz");
    }

    #[test]
    fn source_is_exposed() {
        use std::error::Error as _;
        let err = BridgeError::provider("wallet_watchAsset", ProviderError::new(-32603, "internal"));
        assert!(err.source().is_some());
    }
}
