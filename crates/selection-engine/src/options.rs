use std::collections::HashSet;

use reference_data::{Table, Tables};
use tracing::debug;

use crate::dataset::Dataset;
use crate::entry::{AssetContractRow, Entry};

/// Ordered options of `dataset`.
///
/// `chain` only affects [`Dataset::EvmAssets`]; an empty filter counts as
/// no filter.
pub fn options(tables: &Tables, dataset: Dataset, chain: Option<&str>) -> Vec<Entry> {
    match dataset {
        Dataset::Chains => tables
            .evm_chains
            .iter()
            .filter(|c| !c.is_staging)
            .chain(&tables.cosmos_chains)
            .cloned()
            .map(Entry::Chain)
            .collect(),
        Dataset::EvmChains => tables
            .evm_chains
            .iter()
            .filter(|c| !c.is_staging)
            .cloned()
            .map(Entry::Chain)
            .collect(),
        Dataset::CosmosChains => tables.cosmos_chains.iter().cloned().map(Entry::Chain).collect(),
        Dataset::Assets => {
            let mut seen = HashSet::new();
            tables
                .evm_assets
                .iter()
                .chain(&tables.ibc_assets)
                .filter(|a| seen.insert(a.id.as_str()))
                .cloned()
                .map(Entry::Asset)
                .collect()
        }
        Dataset::EvmAssets => evm_asset_rows(tables, chain.filter(|c| !c.is_empty()))
            .into_iter()
            .map(|mut row| {
                row.name = row.symbol.clone();
                Entry::AssetContract(row)
            })
            .collect(),
        Dataset::Raw(table) => raw(tables, table),
    }
}

/// Options of a dataset given by name. Unknown names yield no options.
pub fn options_named(tables: &Tables, name: &str, chain: Option<&str>) -> Vec<Entry> {
    match name.parse::<Dataset>() {
        Ok(dataset) => options(tables, dataset, chain),
        Err(e) => {
            debug!(error = %e, "no options");
            Vec::new()
        }
    }
}

/// Flattened asset/contract rows.
///
/// With a chain filter, every binding on that chain (ignoring case) is kept;
/// without one, only each asset's first binding.
fn evm_asset_rows(tables: &Tables, chain: Option<&str>) -> Vec<AssetContractRow> {
    tables
        .evm_assets
        .iter()
        .flat_map(|asset| {
            let contracts: Vec<_> = match chain {
                Some(chain) => asset
                    .contracts
                    .iter()
                    .filter(|c| c.chain.eq_ignore_ascii_case(chain))
                    .collect(),
                None => asset.contracts.iter().take(1).collect(),
            };
            contracts
                .into_iter()
                .map(move |contract| AssetContractRow::merge(asset, contract))
        })
        .collect()
}

fn raw(tables: &Tables, table: Table) -> Vec<Entry> {
    match table {
        Table::EvmChains => tables.evm_chains.iter().cloned().map(Entry::Chain).collect(),
        Table::CosmosChains => tables.cosmos_chains.iter().cloned().map(Entry::Chain).collect(),
        Table::EvmAssets => tables.evm_assets.iter().cloned().map(Entry::Asset).collect(),
        Table::IbcAssets => tables.ibc_assets.iter().cloned().map(Entry::Asset).collect(),
        Table::Gateways => tables.gateways.iter().cloned().map(Entry::Binding).collect(),
        Table::GasServices => tables.gas_services.iter().cloned().map(Entry::Binding).collect(),
        Table::IbcChannels => tables.ibc_channels.iter().cloned().map(Entry::Channel).collect(),
    }
}
