use selection_engine::AssetContractRow;
use wallet_bridge::provider::default_asset_image;
use wallet_bridge::TokenSpec;

/// Inputs of an "add to wallet" button.
///
/// Without a complete token (symbol, address and non-zero decimals) the
/// button only switches the wallet's network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddToWallet {
    /// Chain key, matched against EVM chain ids ignoring case.
    pub chain: String,
    pub symbol: Option<String>,
    pub address: Option<String>,
    pub decimals: Option<u8>,
    pub image: Option<String>,
}

impl AddToWallet {
    /// Network-only button.
    pub fn network(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            ..Self::default()
        }
    }

    /// Button for one asset/contract row.
    pub fn for_row(row: &AssetContractRow) -> Self {
        Self {
            chain: row.chain.clone(),
            symbol: Some(row.symbol.clone()),
            address: Some(row.address.clone()),
            decimals: Some(row.decimals),
            image: row.image.clone(),
        }
    }

    /// Token to register, with the site's default image when none is set.
    pub fn token(&self, image_dir: &str) -> Option<TokenSpec> {
        let symbol = self.symbol.as_deref().filter(|s| !s.is_empty())?;
        let address = self.address.as_deref().filter(|a| !a.is_empty())?;
        let decimals = self.decimals.filter(|d| *d != 0)?;
        Some(TokenSpec {
            address: address.to_string(),
            symbol: symbol.to_string(),
            decimals,
            image: Some(
                self.image
                    .clone()
                    .unwrap_or_else(|| default_asset_image(image_dir, symbol)),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc_button() -> AddToWallet {
        AddToWallet {
            chain: "Avalanche".into(),
            symbol: Some("axlUSDC".into()),
            address: Some("0xfab550568c688d5d8a52c7d794cb93edc26ec0ec".into()),
            decimals: Some(6),
            image: None,
        }
    }

    #[test]
    fn complete_token_gets_default_image() {
        let token = usdc_button().token("/images/assets").unwrap();
        assert_eq!(token.image.as_deref(), Some("/images/assets/usdc.png"));
        assert_eq!(token.decimals, 6);
    }

    #[test]
    fn explicit_image_wins() {
        let mut button = usdc_button();
        button.image = Some("/images/assets/axlusdc.svg".into());
        assert_eq!(
            button.token("/images/assets").unwrap().image.as_deref(),
            Some("/images/assets/axlusdc.svg")
        );
    }

    #[test]
    fn incomplete_token_is_network_only() {
        assert!(AddToWallet::network("avalanche").token("/images/assets").is_none());

        let mut button = usdc_button();
        button.decimals = Some(0);
        assert!(button.token("/images/assets").is_none());

        let mut button = usdc_button();
        button.address = Some(String::new());
        assert!(button.token("/images/assets").is_none());
    }
}
