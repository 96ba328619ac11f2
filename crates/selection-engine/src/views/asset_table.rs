use reference_data::Tables;

use crate::entry::{AssetContractRow, Entry};
use crate::selection::Selection;

/// One row of the asset/contract table.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRow {
    pub asset: AssetContractRow,
    /// Chain display name, or the raw chain key when the chain is unknown.
    pub chain_name: String,
    pub chain_image: Option<String>,
    pub explorer_url: Option<String>,
    /// Explorer link for the contract address.
    pub address_url: Option<String>,
}

/// Asset/contract rows for the given selections.
///
/// A selected asset narrows the rows to that asset; a selected chain narrows
/// them to bindings on that chain (ignoring case). "All" and no selection
/// both leave the dimension unfiltered.
pub fn contract_rows(
    tables: &Tables,
    chain: &Selection<Entry>,
    asset: &Selection<Entry>,
) -> Vec<ContractRow> {
    let chain_key = chain.selected_key();
    let asset_key = asset.selected_key();

    tables
        .evm_assets
        .iter()
        .filter(|a| asset_key.map_or(true, |key| a.id == key))
        .flat_map(|a| a.contracts.iter().map(move |c| AssetContractRow::merge(a, c)))
        .filter(|row| chain_key.map_or(true, |key| row.on_chain(key)))
        .map(|row| {
            let chain = tables.evm_chain(&row.chain);
            ContractRow {
                chain_name: chain
                    .map(|c| c.name.clone())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| row.chain.clone()),
                chain_image: chain.and_then(|c| c.image.clone()),
                explorer_url: chain.and_then(|c| c.explorer_url()).map(str::to_string),
                address_url: chain
                    .filter(|_| !row.address.is_empty())
                    .and_then(|c| c.address_url(&row.address)),
                asset: row,
            }
        })
        .collect()
}

/// Chain and asset selections of the asset/contract table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetTable {
    chain: Selection<Entry>,
    asset: Selection<Entry>,
}

impl AssetTable {
    pub fn new(chain: Selection<Entry>, asset: Selection<Entry>) -> Self {
        Self { chain, asset }
    }

    pub fn chain(&self) -> &Selection<Entry> {
        &self.chain
    }

    pub fn asset(&self) -> &Selection<Entry> {
        &self.asset
    }

    /// Applies a chain selection.
    ///
    /// When no asset in scope (the selected one, or every asset when none is
    /// selected) has a binding on the new chain, the asset selection falls
    /// back to "all".
    pub fn select_chain(&mut self, tables: &Tables, chain: Selection<Entry>) {
        if let Some(chain_key) = chain.selected_key() {
            let asset_key = self.asset.selected_key();
            let bound = tables.evm_assets.iter().any(|a| {
                asset_key.map_or(true, |key| a.id == key) && a.has_contract_on(chain_key)
            });
            if !bound {
                self.asset = Selection::AllSelected;
            }
        }
        self.chain = chain;
    }

    pub fn select_asset(&mut self, asset: Selection<Entry>) {
        self.asset = asset;
    }

    /// Key the asset dropdown should show: the selected asset or "all".
    pub fn asset_dropdown_key(&self) -> &str {
        self.asset.selected_key().unwrap_or("")
    }

    /// Key the chain dropdown should show: the selected chain or "all".
    pub fn chain_dropdown_key(&self) -> &str {
        self.chain.selected_key().unwrap_or("")
    }

    pub fn rows(&self, tables: &Tables) -> Vec<ContractRow> {
        contract_rows(tables, &self.chain, &self.asset)
    }
}
