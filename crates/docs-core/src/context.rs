use reference_data::lint::{lint_tables, LintIssue};
use reference_data::{Environment, Registry, Tables};
use selection_engine::views::{channel_pairs, AddressBook, AssetTable, ChannelPair, FeeCalculator};
use selection_engine::{options, resolve, Dataset, Dropdown, Entry, Selection};
use tracing::debug;
use wallet_bridge::{BridgeOutcome, WalletBridge, WalletProvider};

use crate::button::AddToWallet;
use crate::config::SiteConfig;
use crate::error::DocsError;

/// Everything a page needs: the site config and the reference tables of the
/// configured environment. Passed explicitly, never global.
#[derive(Debug, Clone)]
pub struct SiteContext<'r> {
    config: SiteConfig,
    registry: &'r Registry,
}

impl SiteContext<'static> {
    /// Context over the tables shipped with the site.
    pub fn embedded(config: SiteConfig) -> Self {
        Self::new(config, Registry::embedded())
    }
}

impl<'r> SiteContext<'r> {
    pub fn new(config: SiteConfig, registry: &'r Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    pub fn tables(&self) -> &'r Tables {
        self.registry.tables(self.config.environment)
    }

    pub fn options(&self, dataset: Dataset, chain: Option<&str>) -> Vec<Entry> {
        options(self.tables(), dataset, chain)
    }

    /// Dropdown over a dataset given by name.
    pub fn dropdown<'a>(
        &self,
        dataset: &str,
        chain: Option<&str>,
        default_key: Option<&str>,
    ) -> Result<Dropdown<'a>, DocsError> {
        let dataset = dataset.parse::<Dataset>()?;
        Ok(Dropdown::new(self.options(dataset, chain)).with_default_key(default_key))
    }

    /// Selects `key` among the options of `dataset`.
    pub fn select(&self, dataset: Dataset, key: Option<&str>) -> Selection<Entry> {
        resolve(&self.options(dataset, None), key)
    }

    /// Fee calculator with the configured initial selections.
    pub fn fee_calculator(&self) -> FeeCalculator {
        let defaults = &self.config.calculator;
        FeeCalculator {
            asset: self.select(Dataset::Assets, Some(defaults.asset.as_str())),
            source: self.select(Dataset::Chains, Some(defaults.source_chain.as_str())),
            destination: self.select(Dataset::Chains, Some(defaults.destination_chain.as_str())),
        }
    }

    /// Asset/contract table with the configured asset preselected.
    pub fn asset_table(&self) -> AssetTable {
        AssetTable::new(
            Selection::NoSelection,
            self.select(Dataset::EvmAssets, Some(self.config.asset_table_asset.as_str())),
        )
    }

    pub fn address_book(&self) -> AddressBook {
        AddressBook::default()
    }

    pub fn channel_pairs(&self) -> Vec<ChannelPair<'r>> {
        channel_pairs(self.tables(), &self.config.hub_chain)
    }

    pub fn lint(&self) -> Vec<LintIssue> {
        lint_tables(self.tables())
    }

    pub fn wallet_bridge<P: WalletProvider>(&self, provider: P) -> WalletBridge<P> {
        WalletBridge::new(provider, self.config.site_origin.clone())
    }

    /// Handles a click on an "add to wallet" button.
    pub fn add_to_wallet<P: WalletProvider>(
        &self,
        bridge: &mut WalletBridge<P>,
        button: &AddToWallet,
    ) -> Result<BridgeOutcome, DocsError> {
        let chain = self
            .tables()
            .evm_chain_ignore_case(&button.chain)
            .ok_or_else(|| DocsError::UnknownChain(button.chain.clone()))?;
        let token = button.token(&self.config.asset_image_dir);
        debug!(chain = %chain.id, token = ?token.as_ref().map(|t| &t.symbol), "add to wallet");
        Ok(bridge.request_chain(chain, token)?)
    }
}
