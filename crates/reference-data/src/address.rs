use sha3::{Digest, Keccak256};

use crate::error::DataError;

/// Returns the 40 hex characters of a 0x-prefixed EVM address.
fn hex_body(address: &str) -> Result<&str, DataError> {
    let body = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| DataError::InvalidAddress(format!("{address}: missing 0x prefix")))?;

    if body.len() != 40 {
        return Err(DataError::InvalidAddress(format!(
            "{address}: expected 40 hex characters, got {}",
            body.len()
        )));
    }

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DataError::InvalidAddress(format!(
            "{address}: contains non-hex characters"
        )));
    }

    Ok(body)
}

/// Applies EIP-55 mixed-case checksum encoding to an EVM address.
pub fn checksum_address(address: &str) -> Result<String, DataError> {
    let lower = hex_body(address)?.to_ascii_lowercase();
    let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (c, nibble) in lower.chars().zip(hash.chars()) {
        // Letters whose hash nibble is 8..=f are uppercased.
        if c.is_ascii_alphabetic() && matches!(nibble, '8'..='9' | 'a'..='f') {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    Ok(checksummed)
}

/// Checks an EVM contract address as it appears in the reference tables.
///
/// Returns `Ok(false)` for a well-formed mixed-case address whose EIP-55
/// checksum does not match. Single-case addresses carry no checksum.
pub fn validate_address(address: &str) -> Result<bool, DataError> {
    let body = hex_body(address)?;

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return Ok(true);
    }

    Ok(checksum_address(address)?[2..] == *body)
}

/// Case-insensitive address comparison. Malformed inputs never match.
pub fn same_address(a: &str, b: &str) -> bool {
    match (hex_body(a), hex_body(b)) {
        (Ok(a), Ok(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eip55_known_vectors() {
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in cases {
            let lower = format!("0x{}", expected[2..].to_lowercase());
            assert_eq!(checksum_address(&lower).unwrap(), expected);
        }
    }

    #[test]
    fn single_case_addresses_are_valid() {
        assert!(validate_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap());
        assert!(validate_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap());
    }

    #[test]
    fn checksummed_address_is_valid() {
        assert!(validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap());
    }

    #[test]
    fn broken_checksum_is_reported() {
        assert!(!validate_address("0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap());
    }

    #[test]
    fn malformed_addresses_error() {
        assert!(validate_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
        assert!(validate_address("0x5aAeb6053F").is_err());
        assert!(validate_address("0xGGGGb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn same_address_ignores_case() {
        assert!(same_address(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
        assert!(!same_address("0x1", "0x1"));
    }
}
