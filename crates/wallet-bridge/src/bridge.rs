use reference_data::{Chain, ProviderParams};
use tracing::{debug, info, warn};

use crate::chain_id::{parse_chain_id, to_hex_chain_id};
use crate::error::BridgeError;
use crate::provider::{TokenSpec, WalletProvider};

const SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
const ADD_CHAIN: &str = "wallet_addEthereumChain";
const WATCH_ASSET: &str = "wallet_watchAsset";

/// Where the bridge is in reconciling the wallet with a requested chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BridgeState {
    #[default]
    Idle,
    /// A switch was accepted; waiting for the wallet to report `target`.
    AwaitingChainSwitch {
        target: u64,
        asset: Option<TokenSpec>,
    },
    /// The wallet is on `chain_id` and is being asked to watch `asset`.
    AwaitingAssetRegistration { chain_id: u64, asset: TokenSpec },
}

/// Result of a bridge step that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// The wallet answered a token registration; `accepted` is false when the
    /// user dismissed it.
    AssetRegistered { accepted: bool },
    /// The wallet accepted a switch request and will report the new chain.
    SwitchRequested,
    /// The wallet reported the requested chain and nothing else was pending.
    SwitchCompleted,
}

/// Drives a [`WalletProvider`] towards a requested chain and token.
///
/// The wallet's current chain is only ever learned from
/// [`on_chain_changed`](Self::on_chain_changed).
#[derive(Debug)]
pub struct WalletBridge<P> {
    provider: P,
    site_origin: String,
    current_chain: Option<u64>,
    state: BridgeState,
}

impl<P: WalletProvider> WalletBridge<P> {
    /// `site_origin` is used to make relative token images absolute.
    pub fn new(provider: P, site_origin: impl Into<String>) -> Self {
        Self {
            provider,
            site_origin: site_origin.into(),
            current_chain: None,
            state: BridgeState::Idle,
        }
    }

    /// Seeds the wallet chain, e.g. from an initial `eth_chainId` read.
    pub fn with_current_chain(mut self, chain_id: u64) -> Self {
        self.current_chain = Some(chain_id);
        self
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    pub fn current_chain(&self) -> Option<u64> {
        self.current_chain
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Asks the wallet to be on `chain`, then to watch `asset` if given.
    ///
    /// When the wallet is already on `chain` the token is registered right
    /// away. A chain the wallet does not know is added from the chain's
    /// network definition and the switch is retried once. Any pending request
    /// is dropped first.
    pub fn request_chain(
        &mut self,
        chain: &Chain,
        asset: Option<TokenSpec>,
    ) -> Result<BridgeOutcome, BridgeError> {
        let target = chain
            .chain_id
            .ok_or_else(|| BridgeError::MissingChainId(chain.id.clone()))?;

        if self.state != BridgeState::Idle {
            info!(previous = ?self.state, target, "superseding pending wallet request");
            self.state = BridgeState::Idle;
        }

        match asset {
            Some(asset) if self.current_chain == Some(target) => self.register_asset(target, asset),
            asset => {
                let already_there = self.current_chain == Some(target);
                self.switch_chain(target, &chain.provider_params)?;
                if !already_there {
                    self.state = BridgeState::AwaitingChainSwitch { target, asset };
                }
                Ok(BridgeOutcome::SwitchRequested)
            }
        }
    }

    /// Handles the wallet's `chainChanged` notification.
    ///
    /// Returns the outcome of whatever the new chain completed, or `None`
    /// when nothing was waiting for it.
    pub fn on_chain_changed(&mut self, chain_id: &str) -> Result<Option<BridgeOutcome>, BridgeError> {
        let chain_id = parse_chain_id(chain_id).inspect_err(|err| {
            warn!(error = %err, "ignoring chain change with unparsable id");
        })?;
        self.current_chain = Some(chain_id);

        match std::mem::take(&mut self.state) {
            BridgeState::AwaitingChainSwitch { target, asset } if target == chain_id => match asset {
                Some(asset) => self.register_asset(chain_id, asset).map(Some),
                None => {
                    debug!(chain_id, "wallet reached requested chain");
                    Ok(Some(BridgeOutcome::SwitchCompleted))
                }
            },
            state => {
                if state != BridgeState::Idle {
                    debug!(chain_id, pending = ?state, "chain change does not match pending request");
                }
                self.state = state;
                Ok(None)
            }
        }
    }

    fn switch_chain(&mut self, target: u64, params: &[ProviderParams]) -> Result<(), BridgeError> {
        let hex = to_hex_chain_id(target);
        let result = match self.provider.switch_chain(&hex) {
            Err(err) if err.is_unrecognized_chain() => {
                debug!(chain_id = %hex, "wallet does not know chain, adding it");
                self.add_and_retry(target, &hex, params)
            }
            other => other.map_err(|err| BridgeError::provider(SWITCH_CHAIN, err)),
        };
        result.map_err(|err| self.fail(err))
    }

    fn add_and_retry(&mut self, target: u64, hex: &str, params: &[ProviderParams]) -> Result<(), BridgeError> {
        if params.is_empty() {
            return Err(BridgeError::NoNetworkDefinition(target));
        }
        self.provider
            .add_chain(params)
            .map_err(|err| BridgeError::provider(ADD_CHAIN, err))?;
        self.provider
            .switch_chain(hex)
            .map_err(|err| BridgeError::provider(SWITCH_CHAIN, err))
    }

    fn register_asset(&mut self, chain_id: u64, asset: TokenSpec) -> Result<BridgeOutcome, BridgeError> {
        let request = asset.watch_request(&self.site_origin);
        self.state = BridgeState::AwaitingAssetRegistration { chain_id, asset };
        let result = self.provider.watch_asset(&request);
        self.state = BridgeState::Idle;

        match result {
            Ok(accepted) => {
                debug!(chain_id, symbol = %request.options.symbol, accepted, "token registration answered");
                Ok(BridgeOutcome::AssetRegistered { accepted })
            }
            Err(err) => Err(self.fail(BridgeError::provider(WATCH_ASSET, err))),
        }
    }

    fn fail(&mut self, err: BridgeError) -> BridgeError {
        warn!(error = %err, "wallet request failed");
        self.state = BridgeState::Idle;
        err
    }
}

/// Discards a bridge failure after it has been logged.
///
/// Wallet failures never break the page; callers that have nothing to show
/// for them can pass results through here.
pub fn best_effort<T>(result: Result<T, BridgeError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "discarding wallet failure");
            None
        }
    }
}
