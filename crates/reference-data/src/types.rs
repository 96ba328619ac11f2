use serde::{Deserialize, Deserializer, Serialize};

/// Native currency descriptor, in the shape wallets expect for `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Wallet connection parameters for a chain.
///
/// Field names follow the wallet provider convention (camelCase, hex chain id),
/// so the record can be handed to the provider unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderParams {
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub chain_name: String,
    #[serde(default)]
    pub rpc_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<NativeCurrency>,
    #[serde(default)]
    pub block_explorer_urls: Vec<String>,
}

/// A blockchain network entry (EVM or Cosmos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Numeric network id. Cosmos chains carry string chain ids, which are not kept.
    #[serde(
        default,
        deserialize_with = "numeric_chain_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub provider_params: Vec<ProviderParams>,
    #[serde(default)]
    pub is_staging: bool,
}

impl Chain {
    /// First RPC URL of the first provider parameter set.
    pub fn rpc_url(&self) -> Option<&str> {
        self.provider_params
            .first()
            .and_then(|p| p.rpc_urls.first())
            .map(String::as_str)
    }

    /// First block explorer URL of the first provider parameter set.
    pub fn explorer_url(&self) -> Option<&str> {
        self.provider_params
            .first()
            .and_then(|p| p.block_explorer_urls.first())
            .map(String::as_str)
    }

    /// Explorer link for an address on this chain, if the chain has an explorer.
    pub fn address_url(&self, address: &str) -> Option<String> {
        self.explorer_url()
            .map(|url| format!("{}/address/{address}", url.trim_end_matches('/')))
    }

    pub fn id_matches(&self, key: &str) -> bool {
        self.id.eq_ignore_ascii_case(key)
    }
}

/// An asset's binding to one specific chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub chain: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// A fungible token definition, bound to chains through its contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_fee: Option<f64>,
}

impl Asset {
    /// Contract bound to exactly `chain` (case-sensitive, as stored).
    pub fn contract_on(&self, chain: &str) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.chain == chain)
    }

    pub fn has_contract_on(&self, chain: &str) -> bool {
        self.contract_on(chain).is_some()
    }
}

/// Chain key to contract address, for a protocol role (gateway, gas service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBinding {
    pub id: String,
    #[serde(default)]
    pub address: String,
}

/// Directed inter-chain channel pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelLink {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub channel_id: String,
}

impl ChannelLink {
    /// The end of the link that is not `hub`, if any.
    pub fn counterparty(&self, hub: &str) -> Option<&str> {
        [self.from.as_str(), self.to.as_str()]
            .into_iter()
            .find(|id| !id.is_empty() && *id != hub)
    }
}

fn numeric_chain_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}
