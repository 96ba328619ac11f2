use reference_data::ProviderParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code wallets return from `wallet_switchEthereumChain` when the
/// requested chain has not been added yet.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Error code for a request the user rejected.
pub const USER_REJECTED_CODE: i64 = 4001;

/// A rejected wallet request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN_CODE
    }
}

/// Token details shown by `wallet_watchAsset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetOptions {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Parameters of a `wallet_watchAsset` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub options: WatchAssetOptions,
}

/// Injected browser wallet.
///
/// Each method is one request/response round trip. Chain changes are not
/// polled; the host forwards the wallet's `chainChanged` notification to
/// [`crate::WalletBridge::on_chain_changed`].
pub trait WalletProvider {
    /// `wallet_switchEthereumChain` with a hex chain id.
    fn switch_chain(&mut self, chain_id: &str) -> Result<(), ProviderError>;

    /// `wallet_addEthereumChain` with the chain's network definition.
    fn add_chain(&mut self, params: &[ProviderParams]) -> Result<(), ProviderError>;

    /// `wallet_watchAsset`; `Ok(false)` when the user declined.
    fn watch_asset(&mut self, request: &WatchAssetRequest) -> Result<bool, ProviderError>;
}

impl<P: WalletProvider + ?Sized> WalletProvider for &mut P {
    fn switch_chain(&mut self, chain_id: &str) -> Result<(), ProviderError> {
        (**self).switch_chain(chain_id)
    }

    fn add_chain(&mut self, params: &[ProviderParams]) -> Result<(), ProviderError> {
        (**self).add_chain(params)
    }

    fn watch_asset(&mut self, request: &WatchAssetRequest) -> Result<bool, ProviderError> {
        (**self).watch_asset(request)
    }
}

/// A token to register in the wallet once it is on the right chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    /// Site-relative (`/images/...`) or absolute image URL.
    pub image: Option<String>,
}

impl TokenSpec {
    /// ERC-20 watch request with the image resolved against `site_origin`.
    pub fn watch_request(&self, site_origin: &str) -> WatchAssetRequest {
        let image = self.image.as_deref().map(|image| {
            if image.starts_with('/') {
                format!("{}{image}", site_origin.trim_end_matches('/'))
            } else {
                image.to_string()
            }
        });
        WatchAssetRequest {
            kind: "ERC20".to_string(),
            options: WatchAssetOptions {
                address: self.address.clone(),
                symbol: self.symbol.clone(),
                decimals: self.decimals,
                image,
            },
        }
    }
}

/// Default site image for a token symbol.
///
/// Wrapped `axl`-prefixed symbols share the image of the underlying token,
/// except symbols that also end in `axl`.
pub fn default_asset_image(image_dir: &str, symbol: &str) -> String {
    let base = match symbol.strip_prefix("axl") {
        Some(rest) if !symbol.ends_with("axl") => rest,
        _ => symbol,
    };
    format!("{}/{}.png", image_dir.trim_end_matches('/'), base.to_lowercase())
}
