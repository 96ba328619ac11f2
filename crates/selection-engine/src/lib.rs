//! Selection engine and derived views over the reference tables.
//!
//! Everything here is synchronous and side-effect free: option lists are
//! derived from immutable tables, selections are plain values owned by the
//! caller, and missing data degrades to empty lists or "N/A" rather than
//! errors.

pub mod dataset;
pub mod dropdown;
pub mod entry;
pub mod error;
pub mod format;
pub mod options;
pub mod selection;
pub mod views;

pub use dataset::Dataset;
pub use dropdown::Dropdown;
pub use entry::{AssetContractRow, Entry};
pub use error::SelectionError;
pub use options::{options, options_named};
pub use selection::{resolve, Keyed, Selection};
