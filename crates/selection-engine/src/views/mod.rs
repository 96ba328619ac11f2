//! Views combining independent selections into rows or totals.

pub mod address_book;
pub mod asset_table;
pub mod channels;
pub mod fee;

pub use address_book::{AddressBook, AssetCard, ChainCard, LinkedAddress};
pub use asset_table::{contract_rows, AssetTable, ContractRow};
pub use channels::{channel_pairs, ChannelPair, DEFAULT_HUB_CHAIN};
pub use fee::{leg_fee, quote, round_fee, FeeCalculator, FeeLeg, FeeQuote};
