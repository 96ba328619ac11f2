//! Browser wallet bridge.
//!
//! This crate provides:
//! - The wallet provider boundary (switch chain, add chain, watch asset)
//! - Hex <-> numeric chain id normalization
//! - A state machine that switches the wallet to a desired chain, registers
//!   the network when the wallet does not know it, and then registers a token

pub mod bridge;
pub mod chain_id;
pub mod error;
pub mod provider;

pub use bridge::{best_effort, BridgeOutcome, BridgeState, WalletBridge};
pub use error::BridgeError;
pub use provider::{ProviderError, TokenSpec, WalletProvider, WatchAssetRequest};
