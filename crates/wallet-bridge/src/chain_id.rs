use crate::error::BridgeError;

/// Parses a chain id as reported by a wallet.
///
/// Wallets report `0x`-prefixed hex; plain decimal is accepted as well.
pub fn parse_chain_id(value: &str) -> Result<u64, BridgeError> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.map_err(|_| BridgeError::InvalidChainId(value.to_string()))
}

/// Hex form of a chain id, as wallets expect it in requests.
pub fn to_hex_chain_id(chain_id: u64) -> String {
    format!("0x{chain_id:x}")
}
