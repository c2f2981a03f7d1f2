//! Observable engine events.

use odra::casper_types::U256;
use odra::prelude::*;

/// Emitted on every collateral deposit.
#[odra::event]
pub struct CollateralDeposited {
    pub account: Address,
    pub asset: Address,
    pub amount: U256,
}

/// Emitted on every collateral withdrawal, including liquidation seizure.
///
/// `from` is the account whose position decreased, `to` the recipient of the
/// underlying tokens.
#[odra::event]
pub struct CollateralRedeemed {
    pub from: Address,
    pub to: Address,
    pub asset: Address,
    pub amount: U256,
}
