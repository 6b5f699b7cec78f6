use alloy::primitives::U256;
use anyhow::{Context, Result};

/// Scale a raw on-chain amount by `10^decimals`.
///
/// The amount is written in scientific notation and parsed, so the result is
/// the nearest `f64` to the true quotient for every `decimals` a `uint8` allows.
pub fn to_human_amount(raw: U256, decimals: u8) -> Result<f64> {
    let scaled = format!("{}e-{}", raw, decimals);
    let amount = scaled
        .parse::<f64>()
        .with_context(|| format!("Failed to scale {} by {} decimals", raw, decimals))?;
    Ok(amount)
}
