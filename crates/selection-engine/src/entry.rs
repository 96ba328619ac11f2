use reference_data::{AddressBinding, Asset, Chain, ChannelLink, Contract};
use serde::Serialize;

/// An asset joined with one of its contract bindings.
///
/// Contract-level overrides (symbol, image, decimals, fee) win over the
/// asset's own values; everything else comes from the asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetContractRow {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub chain: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_fee: Option<f64>,
}

impl AssetContractRow {
    pub fn merge(asset: &Asset, contract: &Contract) -> Self {
        Self {
            id: asset.id.clone(),
            symbol: contract.symbol.clone().unwrap_or_else(|| asset.symbol.clone()),
            name: asset.name.clone(),
            decimals: contract.decimals.unwrap_or(asset.decimals),
            image: contract.image.clone().or_else(|| asset.image.clone()),
            chain: contract.chain.clone(),
            address: contract.address.clone(),
            transfer_fee: contract.transfer_fee.or(asset.transfer_fee),
        }
    }

    pub fn on_chain(&self, chain: &str) -> bool {
        self.chain.eq_ignore_ascii_case(chain)
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Chain(Chain),
    Asset(Asset),
    AssetContract(AssetContractRow),
    Binding(AddressBinding),
    Channel(ChannelLink),
}

impl Entry {
    pub fn id(&self) -> &str {
        match self {
            Entry::Chain(c) => &c.id,
            Entry::Asset(a) => &a.id,
            Entry::AssetContract(r) => &r.id,
            Entry::Binding(b) => &b.id,
            Entry::Channel(l) => &l.channel_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Chain(c) => &c.name,
            Entry::Asset(a) => &a.name,
            Entry::AssetContract(r) => &r.name,
            Entry::Binding(b) => &b.id,
            Entry::Channel(l) => &l.channel_id,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Entry::Chain(c) => c.image.as_deref(),
            Entry::Asset(a) => a.image.as_deref(),
            Entry::AssetContract(r) => r.image.as_deref(),
            Entry::Binding(_) | Entry::Channel(_) => None,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Entry::Asset(a) => Some(&a.symbol),
            Entry::AssetContract(r) => Some(&r.symbol),
            _ => None,
        }
    }

    pub fn as_chain(&self) -> Option<&Chain> {
        match self {
            Entry::Chain(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_asset_contract(&self) -> Option<&AssetContractRow> {
        match self {
            Entry::AssetContract(r) => Some(r),
            _ => None,
        }
    }
}
