//! Common types used across the synthetic asset engine.

use odra::casper_types::U256;
use odra::prelude::*;

/// A single price observation, in the round shape reported by feeds.
#[odra::odra_type]
#[derive(Copy)]
pub struct PriceRound {
    /// Round identifier
    pub round_id: u64,
    /// Signed fixed-point USD price with [`crate::health::FEED_DECIMALS`] decimals
    pub answer: i64,
    /// Timestamp the round was started at
    pub started_at: u64,
    /// Timestamp the answer was last updated at
    pub updated_at: u64,
    /// Round the answer was computed in
    pub answered_in_round: u64,
}

/// Protocol constants snapshot returned by the query surface.
#[odra::odra_type]
pub struct ProtocolParams {
    /// Fixed-point scale for USD values and health factors (1e18)
    pub precision: U256,
    /// Share of collateral value counted toward borrowing power (percent)
    pub liquidation_threshold: U256,
    /// Denominator for threshold and bonus percentages
    pub liquidation_precision: U256,
    /// Extra collateral share awarded to liquidators (percent)
    pub liquidation_bonus: U256,
    /// Minimum safe health factor, scaled by `precision`
    pub min_health_factor: U256,
    /// Maximum accepted price observation age in milliseconds
    pub stale_timeout_ms: u64,
}
