//! Price feed contracts.
//!
//! The engine consumes any contract exposing `latest_round_data` in the
//! [`PriceFeed`] shape. [`ManualPriceFeed`] is the reference implementation:
//! Casper has no ambient feed network, so each reserve asset gets one of
//! these, pushed by an off-chain feeder.

use odra::prelude::*;

use crate::errors::EngineError;
use crate::health::FEED_DECIMALS;
use crate::types::PriceRound;

/// Price feed interface for cross-contract calls.
#[odra::external_contract]
pub trait PriceFeed {
    fn latest_round_data(&self) -> PriceRound;
    fn decimals(&self) -> u8;
}

/// Operator-updated price feed.
#[odra::module]
pub struct ManualPriceFeed {
    /// Feeder account allowed to push rounds
    operator: Var<Address>,
    /// Latest published round
    latest: Var<PriceRound>,
}

#[odra::module]
impl ManualPriceFeed {
    /// Initialize with an operator and a first answer stamped at the current
    /// block time.
    pub fn init(&mut self, operator: Address, initial_answer: i64) {
        self.operator.set(operator);
        let now = self.env().get_block_time();
        self.latest.set(PriceRound {
            round_id: 1,
            answer: initial_answer,
            started_at: now,
            updated_at: now,
            answered_in_round: 1,
        });
    }

    /// Push a new answer stamped with the current block time.
    pub fn set_answer(&mut self, answer: i64) {
        self.require_operator();
        let prev = self.latest.get_or_revert_with(EngineError::InvalidPrice);
        let now = self.env().get_block_time();
        let round_id = prev.round_id + 1;
        self.latest.set(PriceRound {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        });
    }

    /// Overwrite the full round verbatim. Gives keepers and tests control
    /// over timestamps and round ids.
    pub fn set_round(&mut self, round: PriceRound) {
        self.require_operator();
        self.latest.set(round);
    }

    /// Latest published round, without any freshness judgement; staleness is
    /// the consumer's concern.
    pub fn latest_round_data(&self) -> PriceRound {
        self.latest.get_or_revert_with(EngineError::InvalidPrice)
    }

    /// Decimals of the published answers.
    pub fn decimals(&self) -> u8 {
        FEED_DECIMALS
    }

    /// Get the feeder account.
    pub fn get_operator(&self) -> Option<Address> {
        self.operator.get()
    }

    fn require_operator(&self) {
        let caller = self.env().caller();
        let operator = self.operator.get_or_revert_with(EngineError::Unauthorized);
        if caller != operator {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
