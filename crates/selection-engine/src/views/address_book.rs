use reference_data::{AddressBinding, Chain, Tables};

use crate::entry::{AssetContractRow, Entry};
use crate::format::fee_or;
use crate::selection::Selection;
use crate::views::asset_table::contract_rows;

const ETHEREUM: &str = "ethereum";
const MISSING: &str = "-";

fn nonzero(fee: Option<f64>) -> Option<f64> {
    fee.filter(|f| *f != 0.0)
}

/// Contract address together with its explorer link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedAddress {
    pub address: String,
    pub url: Option<String>,
}

impl LinkedAddress {
    fn on(chain: &Chain, binding: Option<&AddressBinding>) -> Option<Self> {
        let binding = binding.filter(|b| !b.address.is_empty())?;
        Some(Self {
            address: binding.address.clone(),
            url: chain.address_url(&binding.address),
        })
    }
}

/// Connection details of one EVM chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainCard {
    pub id: String,
    pub name: String,
    pub chain_id: Option<u64>,
    pub image: Option<String>,
    pub rpc_url: Option<String>,
    pub explorer_url: Option<String>,
    pub gateway: Option<LinkedAddress>,
    pub gas_service: Option<LinkedAddress>,
}

/// Token contract of one asset on one chain, with its transfer fees.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCard {
    pub asset: AssetContractRow,
    /// Chain badge, shown only while no specific chain is selected.
    pub chain_image: Option<String>,
    pub token_url: Option<String>,
    pub fee_to_ethereum: Option<f64>,
    pub fee_to_non_ethereum: Option<f64>,
    pub fee_to_cosmos: Option<f64>,
}

impl AssetCard {
    fn fee_display(&self, fee: Option<f64>) -> String {
        match fee {
            Some(_) => format!("{} {}", fee_or(fee, MISSING), self.asset.symbol),
            None => MISSING.to_string(),
        }
    }

    pub fn fee_to_ethereum_display(&self) -> String {
        self.fee_display(self.fee_to_ethereum)
    }

    pub fn fee_to_non_ethereum_display(&self) -> String {
        self.fee_display(self.fee_to_non_ethereum)
    }

    pub fn fee_to_cosmos_display(&self) -> String {
        self.fee_display(self.fee_to_cosmos)
    }
}

/// Chain and asset cards of the address reference page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    pub chain: Selection<Entry>,
    pub asset: Selection<Entry>,
}

impl AddressBook {
    /// Chain cards show while a chain is selected or no single asset is.
    pub fn shows_chain_cards(&self) -> bool {
        self.chain.is_selected() || !self.asset.is_selected()
    }

    /// Asset cards show while a chain is selected or an asset (or "all
    /// assets") is.
    pub fn shows_asset_cards(&self) -> bool {
        self.chain.is_selected() || !self.asset.is_none()
    }

    pub fn chain_cards(&self, tables: &Tables) -> Vec<ChainCard> {
        if !self.shows_chain_cards() {
            return Vec::new();
        }
        let chain_key = self.chain.selected_key();

        tables
            .evm_chains
            .iter()
            .filter(|c| !c.is_staging)
            .filter(|c| chain_key.map_or(true, |key| c.id == key))
            .map(|c| ChainCard {
                id: c.id.clone(),
                name: c.name.clone(),
                chain_id: c.chain_id,
                image: c.image.clone(),
                rpc_url: c.rpc_url().map(str::to_string),
                explorer_url: c.explorer_url().map(str::to_string),
                gateway: LinkedAddress::on(c, tables.gateway(&c.id)),
                gas_service: LinkedAddress::on(c, tables.gas_service(&c.id)),
            })
            .collect()
    }

    pub fn asset_cards(&self, tables: &Tables) -> Vec<AssetCard> {
        if !self.shows_asset_cards() {
            return Vec::new();
        }
        let show_chain_badge = !self.chain.is_selected();

        contract_rows(tables, &self.chain, &self.asset)
            .into_iter()
            .map(|row| {
                let asset = tables.evm_asset(&row.asset.id);
                AssetCard {
                    chain_image: row.chain_image.filter(|_| show_chain_badge),
                    token_url: row.address_url,
                    fee_to_ethereum: nonzero(
                        asset
                            .and_then(|a| a.contract_on(ETHEREUM))
                            .and_then(|c| c.transfer_fee),
                    ),
                    fee_to_non_ethereum: nonzero(asset.and_then(|a| a.transfer_fee)),
                    fee_to_cosmos: nonzero(
                        tables.ibc_asset(&row.asset.id).and_then(|a| a.transfer_fee),
                    ),
                    asset: row.asset,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::options::{options, tests::fixture};
    use crate::selection::resolve;

    fn pick(tables: &Tables, dataset: Dataset, id: &str) -> Selection<Entry> {
        resolve(&options(tables, dataset, None), Some(id))
    }

    #[test]
    fn initial_page_shows_only_chain_cards() {
        let tables = fixture();
        let book = AddressBook::default();
        assert!(book.shows_chain_cards());
        assert!(!book.shows_asset_cards());

        let cards = book.chain_cards(&tables);
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ethereum", "avalanche", "polygon"]);
        assert!(book.asset_cards(&tables).is_empty());
    }

    #[test]
    fn chain_card_links_gateway_and_gas_service() {
        let tables = fixture();
        let book = AddressBook {
            chain: pick(&tables, Dataset::EvmChains, "ethereum"),
            asset: Selection::NoSelection,
        };
        let cards = book.chain_cards(&tables);
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.chain_id, Some(1));
        assert_eq!(card.rpc_url.as_deref(), Some("https://rpc.ethereum"));
        assert_eq!(
            card.gateway,
            Some(LinkedAddress {
                address: "0xg1".into(),
                url: Some("https://etherscan.io/address/0xg1".into())
            })
        );
        assert_eq!(card.gas_service.as_ref().map(|g| g.address.as_str()), Some("0xs1"));
    }

    #[test]
    fn chain_without_bindings_has_no_links() {
        let tables = fixture();
        let book = AddressBook {
            chain: pick(&tables, Dataset::EvmChains, "polygon"),
            asset: Selection::NoSelection,
        };
        let card = &book.chain_cards(&tables)[0];
        assert!(card.gateway.is_none());
        assert!(card.gas_service.is_none());
        assert!(card.explorer_url.is_none());
    }

    #[test]
    fn selected_asset_hides_chain_cards() {
        let tables = fixture();
        let book = AddressBook {
            chain: Selection::AllSelected,
            asset: pick(&tables, Dataset::EvmAssets, "uusdc"),
        };
        assert!(book.chain_cards(&tables).is_empty());

        let cards = book.asset_cards(&tables);
        assert_eq!(cards.len(), 3);
        let first = &cards[0];
        assert_eq!(first.fee_to_ethereum, Some(20.0));
        assert_eq!(first.fee_to_non_ethereum, Some(1.5));
        assert_eq!(first.fee_to_cosmos, Some(0.2));
        assert_eq!(first.fee_to_ethereum_display(), "20 USDC");
        assert!(first.token_url.is_some());
    }

    #[test]
    fn all_assets_show_both_card_kinds() {
        let tables = fixture();
        let book = AddressBook {
            chain: Selection::NoSelection,
            asset: Selection::AllSelected,
        };
        assert!(book.shows_chain_cards());
        assert_eq!(book.asset_cards(&tables).len(), 4);
    }

    #[test]
    fn missing_fees_show_dash() {
        let tables = fixture();
        let book = AddressBook {
            chain: pick(&tables, Dataset::EvmChains, "avalanche"),
            asset: pick(&tables, Dataset::EvmAssets, "uusd"),
        };
        let cards = book.asset_cards(&tables);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].fee_to_ethereum_display(), "-");
        assert_eq!(cards[0].fee_to_non_ethereum_display(), "-");
        assert_eq!(cards[0].fee_to_cosmos_display(), "-");
        assert!(cards[0].chain_image.is_none());
    }

    #[test]
    fn zero_fee_counts_as_missing() {
        let mut tables = fixture();
        tables.ibc_assets[0].transfer_fee = Some(0.0);
        let book = AddressBook {
            chain: pick(&tables, Dataset::EvmChains, "ethereum"),
            asset: pick(&tables, Dataset::EvmAssets, "uusdc"),
        };
        let cards = book.asset_cards(&tables);
        assert_eq!(cards[0].fee_to_cosmos, None);
        assert_eq!(cards[0].fee_to_cosmos_display(), "-");
    }
}
