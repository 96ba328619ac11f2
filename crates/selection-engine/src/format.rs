//! Display helpers shared by the views.

/// Shortens `value` to `keep` leading and trailing characters around `...`.
///
/// Values short enough that shortening would not save anything are
/// returned as is.
pub fn ellipse(value: &str, keep: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= keep * 2 + 3 {
        return value.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}...{tail}")
}

/// Fee value as shown next to a symbol, or `missing` when there is none.
pub fn fee_or(fee: Option<f64>, missing: &str) -> String {
    match fee {
        Some(fee) => format_amount(fee),
        None => missing.to_string(),
    }
}

/// Plain decimal rendering, no exponent and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}
