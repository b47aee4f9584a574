// src/blockchain/services/units.rs
//
// Fixed-ratio conversions between wei and the human-scale units.

use crate::blockchain::models::{GatewayError, GatewayResult};
use ethers::{types::U256, utils};

pub const ETHER_DECIMALS: u32 = 18;
pub const GWEI_DECIMALS: u32 = 9;

/// Renders `value / 10^decimals` exactly, trimming trailing zeros but keeping
/// at least one fractional digit.
pub fn format_units(value: U256, decimals: u32) -> String {
    match utils::format_units(value, decimals) {
        Ok(formatted) => trim_fraction(&formatted),
        // only reachable for decimals above 77
        Err(_) => value.to_string(),
    }
}

pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

pub fn format_gwei(wei: U256) -> String {
    format_units(wei, GWEI_DECIMALS)
}

fn trim_fraction(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}

/// Converts an ether amount supplied as a float into wei.
///
/// The float goes through its shortest round-trip decimal form, so `0.01`
/// becomes exactly `10^16` wei. Digits past 18 decimals are truncated.
pub fn parse_ether(amount: f64) -> GatewayResult<U256> {
    if !amount.is_finite() {
        return Err(GatewayError::InvalidAmount(format!(
            "{} is not a finite number",
            amount
        )));
    }
    if amount < 0.0 {
        return Err(GatewayError::InvalidAmount(format!(
            "{} is negative",
            amount
        )));
    }

    // -0.0 renders as "-0"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    utils::parse_ether(amount)
        .map_err(|e| GatewayError::InvalidAmount(format!("{}: {}", amount, e)))
}
