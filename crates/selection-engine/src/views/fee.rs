use reference_data::Tables;

use crate::entry::Entry;
use crate::format::fee_or;
use crate::selection::Selection;

/// Decimal places kept in the fee total.
pub const FEE_DECIMALS: i32 = 6;

const NOT_AVAILABLE: &str = "N/A";

/// Zero counts as "no fee", matching how the fee tables are authored.
fn present(fee: Option<f64>) -> Option<f64> {
    fee.filter(|f| *f != 0.0)
}

/// Transfer fee of `asset_id` for one leg on `chain`.
///
/// EVM chains use the contract's own fee, falling back to the asset-level fee
/// only when the asset has a binding on that chain. Cosmos chains use the
/// IBC asset's fee. Unknown chains have no fee.
pub fn leg_fee(tables: &Tables, asset_id: &str, chain: &str) -> Option<f64> {
    if tables.is_evm_chain(chain) {
        let asset = tables.evm_asset(asset_id)?;
        let contract = asset.contract_on(chain)?;
        present(contract.transfer_fee).or_else(|| present(asset.transfer_fee))
    } else if tables.is_cosmos_chain(chain) {
        present(tables.ibc_asset(asset_id)?.transfer_fee)
    } else {
        None
    }
}

/// Rounds to [`FEE_DECIMALS`] places.
pub fn round_fee(fee: f64) -> f64 {
    let scale = 10f64.powi(FEE_DECIMALS);
    (fee * scale).round() / scale
}

/// Fee of a single leg.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeLeg {
    pub chain: Option<String>,
    pub fee: Option<f64>,
}

impl FeeLeg {
    /// Contribution to the total; a missing fee counts as zero.
    pub fn amount(&self) -> f64 {
        self.fee.unwrap_or(0.0)
    }

    /// Text shown for the leg; a missing fee shows as "N/A".
    pub fn display(&self) -> String {
        fee_or(self.fee, NOT_AVAILABLE)
    }
}

/// Source + destination fee breakdown for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeQuote {
    pub symbol: String,
    pub source: FeeLeg,
    pub destination: FeeLeg,
    pub total: f64,
}

impl FeeQuote {
    pub fn source_display(&self) -> String {
        format!("{} {}", self.source.display(), self.symbol)
    }

    pub fn destination_display(&self) -> String {
        format!("{} {}", self.destination.display(), self.symbol)
    }

    pub fn total_display(&self) -> String {
        format!("{} {}", fee_or(Some(self.total), NOT_AVAILABLE), self.symbol)
    }
}

/// Fee breakdown for the selected asset between two selected chains.
pub fn quote(
    tables: &Tables,
    asset: &Selection<Entry>,
    source: &Selection<Entry>,
    destination: &Selection<Entry>,
) -> FeeQuote {
    let asset_id = asset.selected_key();
    let leg = |chain: &Selection<Entry>| {
        let chain = chain.selected_key();
        FeeLeg {
            chain: chain.map(str::to_string),
            fee: asset_id.zip(chain).and_then(|(a, c)| leg_fee(tables, a, c)),
        }
    };

    let source = leg(source);
    let destination = leg(destination);
    FeeQuote {
        symbol: asset
            .selected()
            .and_then(Entry::symbol)
            .unwrap_or_default()
            .to_string(),
        total: round_fee(source.amount() + destination.amount()),
        source,
        destination,
    }
}

/// Selections of the transfer-fee calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeCalculator {
    pub asset: Selection<Entry>,
    pub source: Selection<Entry>,
    pub destination: Selection<Entry>,
}

impl FeeCalculator {
    pub fn select_asset(&mut self, asset: Selection<Entry>) {
        self.asset = asset;
    }

    pub fn select_source(&mut self, chain: Selection<Entry>) {
        self.source = chain;
    }

    pub fn select_destination(&mut self, chain: Selection<Entry>) {
        self.destination = chain;
    }

    pub fn quote(&self, tables: &Tables) -> FeeQuote {
        quote(tables, &self.asset, &self.source, &self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::options::{options, tests::fixture};
    use crate::selection::resolve;
    use serde_json::json;

    fn pick(tables: &Tables, dataset: Dataset, id: &str) -> Selection<Entry> {
        resolve(&options(tables, dataset, None), Some(id))
    }

    fn calculator(tables: &Tables, asset: &str, source: &str, destination: &str) -> FeeCalculator {
        FeeCalculator {
            asset: pick(tables, Dataset::Assets, asset),
            source: pick(tables, Dataset::Chains, source),
            destination: pick(tables, Dataset::Chains, destination),
        }
    }

    #[test]
    fn evm_leg_prefers_contract_fee() {
        assert_eq!(leg_fee(&fixture(), "uusdc", "ethereum"), Some(20.0));
    }

    #[test]
    fn evm_leg_falls_back_to_asset_fee_when_bound() {
        assert_eq!(leg_fee(&fixture(), "uusdc", "avalanche"), Some(1.5));
    }

    #[test]
    fn evm_leg_without_binding_has_no_fee() {
        // weth-wei has an asset-level fee but no binding on avalanche.
        assert_eq!(leg_fee(&fixture(), "weth-wei", "avalanche"), None);
        // uusd is bound on avalanche but has no fee at all.
        assert_eq!(leg_fee(&fixture(), "uusd", "avalanche"), None);
    }

    #[test]
    fn cosmos_leg_uses_ibc_asset_fee() {
        let tables = fixture();
        assert_eq!(leg_fee(&tables, "uusdc", "osmosis"), Some(0.2));
        assert_eq!(leg_fee(&tables, "uaxl", "osmosis"), None);
        assert_eq!(leg_fee(&tables, "uusd", "osmosis"), None);
    }

    #[test]
    fn unknown_chain_has_no_fee() {
        assert_eq!(leg_fee(&fixture(), "uusdc", "solana"), None);
    }

    #[test]
    fn total_is_rounded_sum() {
        let tables = Tables {
            evm_chains: serde_json::from_value(json!([{ "id": "avalanche", "name": "Avalanche" }]))
                .unwrap(),
            cosmos_chains: serde_json::from_value(json!([{ "id": "osmosis", "name": "Osmosis" }]))
                .unwrap(),
            evm_assets: serde_json::from_value(json!([{
                "id": "uusdc", "symbol": "aUSDC", "transfer_fee": 0.000045,
                "contracts": [{ "chain": "avalanche", "address": "0x1" }]
            }]))
            .unwrap(),
            ibc_assets: serde_json::from_value(json!([
                { "id": "uusdc", "symbol": "aUSDC", "transfer_fee": 0.00002 }
            ]))
            .unwrap(),
            ..Tables::default()
        };
        let quote = calculator(&tables, "uusdc", "avalanche", "osmosis").quote(&tables);
        assert_eq!(quote.source.fee, Some(0.000045));
        assert_eq!(quote.destination.fee, Some(0.00002));
        assert_eq!(quote.total, 0.000065);
        assert_eq!(quote.total_display(), "0.000065 aUSDC");
    }

    #[test]
    fn missing_leg_shows_na_but_adds_zero() {
        let tables = fixture();
        let quote = calculator(&tables, "uusdc", "ethereum", "terra").quote(&tables);
        assert_eq!(quote.source_display(), "20 axlUSDC");
        assert_eq!(quote.destination.fee, Some(0.2));
        assert_eq!(quote.total, 20.2);

        let quote = calculator(&tables, "uusd", "avalanche", "osmosis").quote(&tables);
        assert_eq!(quote.source_display(), "N/A UST");
        assert_eq!(quote.destination_display(), "N/A UST");
        assert_eq!(quote.total, 0.0);
        assert_eq!(quote.total_display(), "0 UST");
    }

    #[test]
    fn each_leg_displays_independently() {
        let tables = fixture();
        let quote = calculator(&tables, "uusdc", "polygon", "avalanche").quote(&tables);
        // Binding is stored as "Polygon", so the exact lookup finds nothing.
        assert_eq!(quote.source.display(), "N/A");
        assert_eq!(quote.destination.display(), "1.5");
        assert_eq!(quote.total, 1.5);
    }

    #[test]
    fn no_asset_means_no_fees() {
        let tables = fixture();
        let mut calc = calculator(&tables, "uusdc", "ethereum", "osmosis");
        calc.select_asset(Selection::NoSelection);
        let quote = calc.quote(&tables);
        assert_eq!(quote.source.fee, None);
        assert_eq!(quote.destination.fee, None);
        assert_eq!(quote.symbol, "");
        assert_eq!(quote.total, 0.0);
    }

    #[test]
    fn round_fee_keeps_six_places() {
        assert_eq!(round_fee(0.1 + 0.2), 0.3);
        assert_eq!(round_fee(1.0000004), 1.0);
        assert_eq!(round_fee(1.0000006), 1.000001);
    }
}
