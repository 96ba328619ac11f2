//! Static reference data for the documentation site.
//!
//! This crate provides:
//! - Chain, asset, contract and binding records (EVM and Cosmos)
//! - Environment partitioning (`mainnet` / `testnet`)
//! - Lenient JSON table loading, with the site's tables embedded
//! - EVM address format and EIP-55 checksum helpers
//! - A lint pass over loaded tables

pub mod address;
pub mod environment;
pub mod error;
pub mod lint;
pub mod registry;
pub mod types;

pub use environment::Environment;
pub use error::DataError;
pub use registry::{Registry, Table, TableSources, Tables};
pub use types::{AddressBinding, Asset, Chain, ChannelLink, Contract, NativeCurrency, ProviderParams};
