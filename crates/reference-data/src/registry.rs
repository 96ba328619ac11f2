use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::environment::Environment;
use crate::error::DataError;
use crate::types::{AddressBinding, Asset, Chain, ChannelLink};

const EVM_CHAINS_JSON: &str = include_str!("../data/evm_chains.json");
const COSMOS_CHAINS_JSON: &str = include_str!("../data/cosmos_chains.json");
const EVM_ASSETS_JSON: &str = include_str!("../data/evm_assets.json");
const IBC_ASSETS_JSON: &str = include_str!("../data/ibc_assets.json");
const GATEWAYS_JSON: &str = include_str!("../data/gateways.json");
const GAS_SERVICES_JSON: &str = include_str!("../data/gas_services.json");
const IBC_CHANNELS_JSON: &str = include_str!("../data/ibc_channels.json");

/// Names of the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    EvmChains,
    CosmosChains,
    EvmAssets,
    IbcAssets,
    Gateways,
    GasServices,
    IbcChannels,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::EvmChains,
        Table::CosmosChains,
        Table::EvmAssets,
        Table::IbcAssets,
        Table::Gateways,
        Table::GasServices,
        Table::IbcChannels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Table::EvmChains => "evm_chains",
            Table::CosmosChains => "cosmos_chains",
            Table::EvmAssets => "evm_assets",
            Table::IbcAssets => "ibc_assets",
            Table::Gateways => "gateways",
            Table::GasServices => "gas_services",
            Table::IbcChannels => "ibc_channels",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DataError::UnknownTable(s.to_string()))
    }
}

/// All reference tables of one environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub evm_chains: Vec<Chain>,
    pub cosmos_chains: Vec<Chain>,
    pub evm_assets: Vec<Asset>,
    pub ibc_assets: Vec<Asset>,
    pub gateways: Vec<AddressBinding>,
    pub gas_services: Vec<AddressBinding>,
    pub ibc_channels: Vec<ChannelLink>,
}

impl Tables {
    pub fn evm_chain(&self, id: &str) -> Option<&Chain> {
        self.evm_chains.iter().find(|c| c.id == id)
    }

    /// EVM chain lookup ignoring ASCII case, as the wallet button does.
    pub fn evm_chain_ignore_case(&self, id: &str) -> Option<&Chain> {
        self.evm_chains.iter().find(|c| c.id_matches(id))
    }

    pub fn evm_chain_by_chain_id(&self, chain_id: u64) -> Option<&Chain> {
        self.evm_chains.iter().find(|c| c.chain_id == Some(chain_id))
    }

    pub fn cosmos_chain(&self, id: &str) -> Option<&Chain> {
        self.cosmos_chains.iter().find(|c| c.id == id)
    }

    pub fn is_evm_chain(&self, id: &str) -> bool {
        self.evm_chain(id).is_some()
    }

    pub fn is_cosmos_chain(&self, id: &str) -> bool {
        self.cosmos_chain(id).is_some()
    }

    pub fn evm_asset(&self, id: &str) -> Option<&Asset> {
        self.evm_assets.iter().find(|a| a.id == id)
    }

    pub fn ibc_asset(&self, id: &str) -> Option<&Asset> {
        self.ibc_assets.iter().find(|a| a.id == id)
    }

    pub fn gateway(&self, chain: &str) -> Option<&AddressBinding> {
        self.gateways.iter().find(|g| g.id == chain)
    }

    pub fn gas_service(&self, chain: &str) -> Option<&AddressBinding> {
        self.gas_services.iter().find(|g| g.id == chain)
    }
}

/// Raw JSON documents for each table. Missing documents load as empty tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSources<'a> {
    pub evm_chains: Option<&'a str>,
    pub cosmos_chains: Option<&'a str>,
    pub evm_assets: Option<&'a str>,
    pub ibc_assets: Option<&'a str>,
    pub gateways: Option<&'a str>,
    pub gas_services: Option<&'a str>,
    pub ibc_channels: Option<&'a str>,
}

impl TableSources<'static> {
    /// The tables shipped with the site.
    pub fn embedded() -> Self {
        Self {
            evm_chains: Some(EVM_CHAINS_JSON),
            cosmos_chains: Some(COSMOS_CHAINS_JSON),
            evm_assets: Some(EVM_ASSETS_JSON),
            ibc_assets: Some(IBC_ASSETS_JSON),
            gateways: Some(GATEWAYS_JSON),
            gas_services: Some(GAS_SERVICES_JSON),
            ibc_channels: Some(IBC_CHANNELS_JSON),
        }
    }
}

/// Environment-partitioned reference tables, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    environments: HashMap<Environment, Tables>,
}

impl Registry {
    /// Registry over the tables embedded in this crate.
    pub fn embedded() -> &'static Registry {
        static EMBEDDED: OnceLock<Registry> = OnceLock::new();
        EMBEDDED.get_or_init(|| Registry::load(&TableSources::embedded()))
    }

    /// Loads every table, degrading absent or malformed ones to empty.
    pub fn load(sources: &TableSources<'_>) -> Registry {
        let mut evm_chains = load_table::<Chain>(Table::EvmChains, sources.evm_chains);
        let mut cosmos_chains = load_table::<Chain>(Table::CosmosChains, sources.cosmos_chains);
        let mut evm_assets = load_table::<Asset>(Table::EvmAssets, sources.evm_assets);
        let mut ibc_assets = load_table::<Asset>(Table::IbcAssets, sources.ibc_assets);
        let mut gateways = load_table::<AddressBinding>(Table::Gateways, sources.gateways);
        let mut gas_services =
            load_table::<AddressBinding>(Table::GasServices, sources.gas_services);
        let mut ibc_channels = load_table::<ChannelLink>(Table::IbcChannels, sources.ibc_channels);

        let environments = Environment::ALL
            .into_iter()
            .map(|env| {
                let tables = Tables {
                    evm_chains: evm_chains.remove(&env).unwrap_or_default(),
                    cosmos_chains: cosmos_chains.remove(&env).unwrap_or_default(),
                    evm_assets: evm_assets.remove(&env).unwrap_or_default(),
                    ibc_assets: ibc_assets.remove(&env).unwrap_or_default(),
                    gateways: gateways.remove(&env).unwrap_or_default(),
                    gas_services: gas_services.remove(&env).unwrap_or_default(),
                    ibc_channels: ibc_channels.remove(&env).unwrap_or_default(),
                };
                (env, tables)
            })
            .collect();

        Registry { environments }
    }

    /// Builds a registry from already-decoded tables.
    pub fn from_tables(environments: HashMap<Environment, Tables>) -> Registry {
        Registry { environments }
    }

    /// Tables of `env`; an environment without data yields empty tables.
    pub fn tables(&self, env: Environment) -> &Tables {
        static EMPTY: OnceLock<Tables> = OnceLock::new();
        self.environments
            .get(&env)
            .unwrap_or_else(|| EMPTY.get_or_init(Tables::default))
    }
}

/// Parses one `{ "<environment>": [ ... ] }` document.
///
/// A document that is not valid JSON, or not an object of arrays, is an
/// error. Individual entries that fail to decode are skipped.
pub fn parse_table<T: DeserializeOwned>(
    table: Table,
    json: &str,
) -> Result<HashMap<Environment, Vec<T>>, DataError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(by_env) = document else {
        return Err(DataError::MalformedTable {
            table: table.as_str(),
            reason: "expected an object keyed by environment".into(),
        });
    };

    let mut out = HashMap::new();
    for (key, entries) in by_env {
        let env = match key.parse::<Environment>() {
            Ok(env) => env,
            Err(_) => {
                debug!(%table, environment = %key, "skipping unknown environment");
                continue;
            }
        };
        let Value::Array(entries) = entries else {
            return Err(DataError::MalformedTable {
                table: table.as_str(),
                reason: format!("{env} is not an array"),
            });
        };

        let decoded = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<T>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(%table, %env, index, error = %e, "skipping malformed entry");
                    None
                }
            })
            .collect();
        out.insert(env, decoded);
    }
    Ok(out)
}

fn load_table<T: DeserializeOwned>(
    table: Table,
    json: Option<&str>,
) -> HashMap<Environment, Vec<T>> {
    let Some(json) = json else {
        debug!(%table, "table not supplied");
        return HashMap::new();
    };
    parse_table(table, json).unwrap_or_else(|e| {
        warn!(%table, error = %e, "table unreadable, using empty table");
        HashMap::new()
    })
}
