//! Price oracle adapter.
//!
//! Wraps an external price feed behind the staleness guard. Reads fail
//! closed: a stale or non-positive answer reverts the calling operation, so
//! everything that needs a valuation for an asset freezes until fresh data
//! lands. There is no cached fallback and no retry.

use odra::casper_types::{RuntimeArgs, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::EngineError;
use crate::types::PriceRound;

/// Maximum accepted observation age: 3 hours. Casper block time is in
/// milliseconds.
pub const STALE_TIMEOUT_MS: u64 = 3 * 60 * 60 * 1000;

/// Stateless adapter over a price feed contract address.
pub struct OracleAdapter;

impl OracleAdapter {
    /// Latest round from the feed, with the freshness guard applied.
    pub fn checked_round(env: &odra::ContractEnv, feed: Address) -> PriceRound {
        let call_def = CallDef::new("latest_round_data", false, RuntimeArgs::new());
        let round: PriceRound = env.call_contract(feed, call_def);

        // A future-dated `updated_at` counts as fresh.
        let age = env.get_block_time().saturating_sub(round.updated_at);
        if age > STALE_TIMEOUT_MS {
            env.revert(EngineError::StalePrice);
        }

        round
    }

    /// Latest price as an unsigned 8-decimal fixed-point value.
    pub fn checked_price(env: &odra::ContractEnv, feed: Address) -> U256 {
        let round = Self::checked_round(env, feed);
        if round.answer <= 0 {
            env.revert(EngineError::InvalidPrice);
        }
        U256::from(round.answer as u64)
    }
}
