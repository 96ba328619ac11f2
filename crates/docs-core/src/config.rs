use reference_data::Environment;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DocsError;

/// Site-wide settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default, deserialize_with = "environment")]
    pub environment: Environment,
    /// Origin that relative token images are resolved against.
    #[serde(default = "default::site_origin")]
    pub site_origin: String,
    #[serde(default = "default::asset_image_dir")]
    pub asset_image_dir: String,
    /// Chain every IBC channel pair is keyed on.
    #[serde(default = "default::hub_chain")]
    pub hub_chain: String,
    /// Asset preselected in the asset/contract table.
    #[serde(default = "default::asset_table_asset")]
    pub asset_table_asset: String,
    #[serde(default)]
    pub calculator: CalculatorDefaults,
}

/// Initial selections of the transfer-fee calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    #[serde(default = "default::calculator_asset")]
    pub asset: String,
    #[serde(default = "default::calculator_source")]
    pub source_chain: String,
    #[serde(default = "default::calculator_destination")]
    pub destination_chain: String,
}

pub mod default {
    pub fn site_origin() -> String {
        "https://docs.axelar.dev".to_string()
    }

    pub fn asset_image_dir() -> String {
        "/images/assets".to_string()
    }

    pub fn hub_chain() -> String {
        selection_engine::views::DEFAULT_HUB_CHAIN.to_string()
    }

    pub fn asset_table_asset() -> String {
        "uusd".to_string()
    }

    pub fn calculator_asset() -> String {
        "uusdc".to_string()
    }

    pub fn calculator_source() -> String {
        "avalanche".to_string()
    }

    pub fn calculator_destination() -> String {
        "osmosis".to_string()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            site_origin: default::site_origin(),
            asset_image_dir: default::asset_image_dir(),
            hub_chain: default::hub_chain(),
            asset_table_asset: default::asset_table_asset(),
            calculator: CalculatorDefaults::default(),
        }
    }
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            asset: default::calculator_asset(),
            source_chain: default::calculator_source(),
            destination_chain: default::calculator_destination(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, DocsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Accepts any casing of `mainnet` / `testnet`.
fn environment<'de, D>(deserializer: D) -> Result<Environment, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}
