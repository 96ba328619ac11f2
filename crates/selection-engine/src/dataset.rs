use std::str::FromStr;

use reference_data::Table;

use crate::error::SelectionError;

/// Named option sources a dropdown can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Non-staging EVM chains followed by Cosmos chains.
    Chains,
    /// EVM assets followed by IBC assets, de-duplicated by id.
    Assets,
    /// EVM chains without staging entries.
    EvmChains,
    CosmosChains,
    /// One row per asset contract binding.
    EvmAssets,
    /// Any other table, passed through unchanged.
    Raw(Table),
}

impl Dataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Chains => "chains",
            Dataset::Assets => "assets",
            Dataset::EvmChains => "evm_chains",
            Dataset::CosmosChains => "cosmos_chains",
            Dataset::EvmAssets => "evm_assets",
            Dataset::Raw(table) => table.as_str(),
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chains" => Ok(Dataset::Chains),
            "assets" => Ok(Dataset::Assets),
            "evm_chains" => Ok(Dataset::EvmChains),
            "cosmos_chains" => Ok(Dataset::CosmosChains),
            "evm_assets" => Ok(Dataset::EvmAssets),
            other => other
                .parse::<Table>()
                .map(Dataset::Raw)
                .map_err(|_| SelectionError::UnknownDataset(other.to_string())),
        }
    }
}
