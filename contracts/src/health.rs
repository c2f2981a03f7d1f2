//! Health factor arithmetic.
//!
//! Pure fixed-point math shared by the engine's invariant checks and its
//! query surface. Division floors at every step, and the multiply/divide
//! order below is part of the protocol's observable numeric behavior:
//! rearranging it changes rounding at the margin.

use odra::casper_types::U256;

/// Fixed-point scale for USD values and health factors (1e18).
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Lifts 8-decimal feed answers to the 1e18 scale (1e10).
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// Decimals reported by price feeds.
pub const FEED_DECIMALS: u8 = 8;

/// Share of collateral value counted toward borrowing power (50%),
/// enforcing at least 200% collateralization.
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for [`LIQUIDATION_THRESHOLD`] and [`LIQUIDATION_BONUS`].
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Extra collateral share awarded to liquidators (10%).
pub const LIQUIDATION_BONUS: u64 = 10;

/// Minimum safe health factor, scaled by 1e18.
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// USD value (1e18 scale) of `amount` tokens at an 8-decimal feed `price`.
pub fn usd_value(price: U256, amount: U256) -> U256 {
    price * U256::from(ADDITIONAL_FEED_PRECISION) * amount / U256::from(PRECISION)
}

/// Token amount worth `usd_amount` (1e18 scale) at an 8-decimal feed `price`.
pub fn token_amount_from_usd(price: U256, usd_amount: U256) -> U256 {
    usd_amount * U256::from(PRECISION) / (price * U256::from(ADDITIONAL_FEED_PRECISION))
}

/// Health factor for a position.
///
/// Zero debt is infinitely healthy and can never be liquidated; the maximum
/// representable value stands in for infinity.
pub fn health_factor(debt: U256, collateral_value_usd: U256) -> U256 {
    if debt.is_zero() {
        return U256::MAX;
    }
    let adjusted = collateral_value_usd * U256::from(LIQUIDATION_THRESHOLD)
        / U256::from(LIQUIDATION_PRECISION);
    adjusted * U256::from(PRECISION) / debt
}
