//! Cross-crate tests over the embedded site data:
//! config -> context -> selections -> views, and button -> bridge -> wallet.
//!
//! Only the public API is used, the same surface the page layer consumes.

use std::collections::HashSet;

use docs_core::reference_data::{Environment, ProviderParams};
use docs_core::selection_engine::{Dataset, Selection};
use docs_core::wallet_bridge::{BridgeOutcome, ProviderError, WalletProvider, WatchAssetRequest};
use docs_core::{AddToWallet, DocsError, SiteConfig, SiteContext};

/// Wallet that knows a set of hex chain ids and records every request.
#[derive(Default)]
struct MockWallet {
    known: HashSet<String>,
    switches: Vec<String>,
    added: Vec<String>,
    watched: Vec<WatchAssetRequest>,
}

impl MockWallet {
    fn knowing(chains: &[&str]) -> Self {
        Self {
            known: chains.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl WalletProvider for MockWallet {
    fn switch_chain(&mut self, chain_id: &str) -> Result<(), ProviderError> {
        self.switches.push(chain_id.to_string());
        if self.known.contains(chain_id) {
            Ok(())
        } else {
            Err(ProviderError::new(4902, "Unrecognized chain ID"))
        }
    }

    fn add_chain(&mut self, params: &[ProviderParams]) -> Result<(), ProviderError> {
        let chain_id = params[0].chain_id.clone();
        self.added.push(chain_id.clone());
        self.known.insert(chain_id);
        Ok(())
    }

    fn watch_asset(&mut self, request: &WatchAssetRequest) -> Result<bool, ProviderError> {
        self.watched.push(request.clone());
        Ok(true)
    }
}

fn site(environment: Environment) -> SiteContext<'static> {
    SiteContext::embedded(SiteConfig::default().with_environment(environment))
}

// ─── Selection -> views ────────────────────────────────────────────

#[test]
fn mainnet_fee_calculator_defaults() {
    let site = site(Environment::Mainnet);
    let quote = site.fee_calculator().quote(site.tables());

    // avalanche has no contract-level fee, so the asset-level fee applies
    assert_eq!(quote.source_display(), "1.5 axlUSDC");
    assert_eq!(quote.destination_display(), "0.2 axlUSDC");
    assert_eq!(quote.total_display(), "1.7 axlUSDC");
}

#[test]
fn testnet_fee_total_is_rounded() {
    let site = site(Environment::Testnet);
    let quote = site.fee_calculator().quote(site.tables());
    assert_eq!(quote.total, 0.000065);
}

#[test]
fn fee_calculator_reacts_to_selection_changes() {
    let site = site(Environment::Mainnet);
    let mut calc = site.fee_calculator();
    calc.select_source(site.select(Dataset::Chains, Some("ethereum")));
    calc.select_destination(site.select(Dataset::Chains, Some("juno")));

    let quote = calc.quote(site.tables());
    assert_eq!(quote.source.fee, Some(20.0));
    // juno is a Cosmos chain and uusdc has an IBC fee
    assert_eq!(quote.destination.fee, Some(0.2));
    assert_eq!(quote.total, 20.2);
}

#[test]
fn asset_table_cascade_on_embedded_data() {
    let site = site(Environment::Mainnet);
    let tables = site.tables();
    let mut table = site.asset_table();
    assert_eq!(table.rows(tables).len(), 3);

    table.select_chain(tables, site.select(Dataset::EvmChains, Some("ethereum")));
    assert_eq!(table.asset().selected_key(), Some("uusd"));
    assert_eq!(table.rows(tables).len(), 1);

    // UST has no contract on fantom
    table.select_chain(tables, site.select(Dataset::EvmChains, Some("fantom")));
    assert_eq!(table.asset(), &Selection::AllSelected);
    let rows = table.rows(tables);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].asset.id, "uusdc");
    assert_eq!(rows[0].chain_name, "Fantom");
}

#[test]
fn evm_assets_options_follow_chain_filter() {
    let site = site(Environment::Mainnet);
    let unfiltered = site.options(Dataset::EvmAssets, None);
    assert_eq!(unfiltered.len(), 3);

    let moonbeam = site.options(Dataset::EvmAssets, Some("Moonbeam"));
    let ids: Vec<_> = moonbeam.iter().map(|e| e.id()).collect();
    assert_eq!(ids, ["uusdc", "weth-wei"]);
    assert_eq!(moonbeam[1].name(), "axlWETH");
}

#[test]
fn staging_chains_stay_out_of_pickers_and_cards() {
    let site = site(Environment::Mainnet);
    let chains = site.options(Dataset::Chains, None);
    assert!(chains.iter().all(|c| c.id() != "arbitrum"));
    assert!(chains.iter().any(|c| c.id() == "osmosis"));

    let cards = site.address_book().chain_cards(site.tables());
    assert_eq!(cards.len(), 5);
    assert!(cards.iter().all(|c| c.gateway.is_some()));
}

#[test]
fn channel_pairs_on_embedded_data() {
    let site = site(Environment::Mainnet);
    let pairs = site.channel_pairs();
    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[0].counterparty_id, "osmosis");
    assert_eq!(pairs[0].hub_channel(), Some("channel-3"));
    assert_eq!(pairs[0].counterparty_channel(), Some("channel-208"));
}

#[test]
fn dropdown_emits_resolved_entries() {
    let site = site(Environment::Mainnet);
    let mut picked = Vec::new();
    {
        let mut dropdown = site
            .dropdown("evm_chains", None, None)
            .unwrap()
            .with_all_option("All Chains")
            .on_select(|selection| picked.push(selection.selected_key().map(str::to_string)));
        assert_eq!(dropdown.label(), "Select Options");

        dropdown.select("polygon");
        assert_eq!(dropdown.label(), "Polygon");
        dropdown.select_all();
        assert_eq!(dropdown.label(), "All Chains");
    }
    assert_eq!(picked, [Some("polygon".to_string()), None]);
}

// ─── Button -> bridge -> wallet ────────────────────────────────────

#[test]
fn add_token_switches_then_registers() {
    let site = site(Environment::Mainnet);
    let mut bridge = site.wallet_bridge(MockWallet::knowing(&["0x1", "0xa86a"])).with_current_chain(1);

    let row = site.options(Dataset::EvmAssets, Some("avalanche"))[0]
        .as_asset_contract()
        .cloned()
        .unwrap();
    let button = AddToWallet::for_row(&row);

    let outcome = site.add_to_wallet(&mut bridge, &button).unwrap();
    assert_eq!(outcome, BridgeOutcome::SwitchRequested);
    assert!(bridge.provider().watched.is_empty());

    let outcome = bridge.on_chain_changed("0xa86a").unwrap();
    assert_eq!(outcome, Some(BridgeOutcome::AssetRegistered { accepted: true }));

    let request = &bridge.provider().watched[0];
    assert_eq!(request.kind, "ERC20");
    assert_eq!(request.options.address, "0xfab550568c688d5d8a52c7d794cb93edc26ec0ec");
    assert_eq!(
        request.options.image.as_deref(),
        Some("https://docs.axelar.dev/images/assets/usdc.png")
    );
}

#[test]
fn add_token_on_current_chain_registers_directly() {
    let site = site(Environment::Mainnet);
    let mut bridge = site.wallet_bridge(MockWallet::knowing(&["0xa86a"])).with_current_chain(43114);
    let button = AddToWallet {
        chain: "AVALANCHE".into(),
        symbol: Some("axlUSDC".into()),
        address: Some("0xfab550568c688d5d8a52c7d794cb93edc26ec0ec".into()),
        decimals: Some(6),
        image: None,
    };

    let outcome = site.add_to_wallet(&mut bridge, &button).unwrap();
    assert_eq!(outcome, BridgeOutcome::AssetRegistered { accepted: true });
    assert!(bridge.provider().switches.is_empty());
}

#[test]
fn unknown_network_is_added_once() {
    let site = site(Environment::Mainnet);
    let mut bridge = site.wallet_bridge(MockWallet::knowing(&["0x1"])).with_current_chain(1);

    site.add_to_wallet(&mut bridge, &AddToWallet::network("fantom")).unwrap();
    assert_eq!(bridge.provider().switches, ["0xfa", "0xfa"]);
    assert_eq!(bridge.provider().added, ["0xfa"]);

    assert_eq!(bridge.on_chain_changed("0xfa").unwrap(), Some(BridgeOutcome::SwitchCompleted));
}

#[test]
fn unknown_button_chain_is_reported() {
    let site = site(Environment::Mainnet);
    let mut bridge = site.wallet_bridge(MockWallet::default());
    let err = site.add_to_wallet(&mut bridge, &AddToWallet::network("solana")).unwrap_err();
    assert!(matches!(err, DocsError::UnknownChain(ref chain) if chain == "solana"));
    assert!(bridge.provider().switches.is_empty());
}
