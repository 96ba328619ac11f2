//! Documentation site core.
//!
//! This crate provides:
//! - Site configuration (environment, origin, image paths, page defaults)
//! - An explicit `SiteContext` that hands pages their tables, dropdowns and views
//! - "Add to wallet" button handling on top of the wallet bridge

pub mod button;
pub mod config;
pub mod context;
pub mod error;

pub use button::AddToWallet;
pub use config::{CalculatorDefaults, SiteConfig};
pub use context::SiteContext;
pub use error::DocsError;

pub use reference_data;
pub use selection_engine;
pub use wallet_bridge;
