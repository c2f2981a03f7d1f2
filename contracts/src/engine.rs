//! Collateral Engine Contract
//!
//! The orchestrator of the synthetic asset protocol: users lock accepted
//! CEP-18 reserve tokens and mint sUSD against them, and the engine enforces
//! at least 200% collateralization on every account that carries debt.
//!
//! Operation flow:
//! 1. Validate caller input before any state read
//! 2. Update the ledgers and emit the observable event
//! 3. Perform the external token call (transfer / mint / burn)
//! 4. Re-check the health factor of the affected account
//!
//! Ledger effects always precede external calls, so reentrant callees only
//! ever observe post-mutation state; every mutating entry point additionally
//! rejects nested re-entry outright. Any failure reverts the whole
//! operation, host-side, with no partial effect.
//!
//! Pricing is fail-closed: a stale feed freezes every valuation-dependent
//! operation for that asset until fresh data arrives (see
//! [`crate::oracle::OracleAdapter`]).

use odra::casper_types::{runtime_args, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::EngineError;
use crate::events::{CollateralDeposited, CollateralRedeemed};
use crate::health::{
    self, LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
    PRECISION,
};
use crate::oracle::{OracleAdapter, STALE_TIMEOUT_MS};
use crate::types::ProtocolParams;

/// Collateral Engine Contract
#[odra::module(events = [CollateralDeposited, CollateralRedeemed])]
pub struct CollateralEngine {
    /// Ordered registry of accepted reserve assets; immutable after `init`
    collateral_assets: Var<Vec<Address>>,
    /// Asset -> price feed; doubles as the whitelist lookup
    price_feeds: Mapping<Address, Address>,
    /// Collateral positions, (account, asset) -> deposited amount
    collateral_deposited: Mapping<(Address, Address), U256>,
    /// Debt positions, account -> minted sUSD
    debt_minted: Mapping<Address, U256>,
    /// sUSD token contract address
    synthetic_token: Var<Address>,
}

#[odra::module]
impl CollateralEngine {
    /// Initialize the engine with the reserve asset registry.
    ///
    /// `assets` and `price_feeds` are matched by index; the registry is
    /// immutable afterwards.
    pub fn init(&mut self, assets: Vec<Address>, price_feeds: Vec<Address>, synthetic_token: Address) {
        if assets.len() != price_feeds.len() {
            self.env().revert(EngineError::MismatchedAssetsAndFeeds);
        }

        for (asset, feed) in assets.iter().zip(price_feeds.iter()) {
            self.price_feeds.set(asset, *feed);
        }
        self.collateral_assets.set(assets);
        self.synthetic_token.set(synthetic_token);
    }

    // ========== Mutating Operations ==========

    /// Deposit reserve tokens as collateral for the caller.
    #[odra(non_reentrant)]
    pub fn deposit_collateral(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.deposit_internal(caller, asset, amount);
    }

    /// Mint sUSD against the caller's collateral.
    #[odra(non_reentrant)]
    pub fn mint(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.mint_internal(caller, amount);
    }

    /// Deposit collateral and mint sUSD in one operation.
    #[odra(non_reentrant)]
    pub fn deposit_collateral_and_mint(
        &mut self,
        asset: Address,
        collateral_amount: U256,
        mint_amount: U256,
    ) {
        let caller = self.env().caller();
        self.deposit_internal(caller, asset, collateral_amount);
        self.mint_internal(caller, mint_amount);
    }

    /// Withdraw collateral back to the caller.
    #[odra(non_reentrant)]
    pub fn redeem_collateral(&mut self, asset: Address, amount: U256) {
        let caller = self.env().caller();
        self.withdraw_internal(caller, caller, asset, amount);
        self.require_health_factor(caller);
    }

    /// Burn the caller's sUSD, reducing their debt.
    #[odra(non_reentrant)]
    pub fn burn(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.burn_internal(caller, caller, amount);
        // Burning cannot worsen a position, but the invariant is re-checked
        // on every debt mutation regardless.
        self.require_health_factor(caller);
    }

    /// Burn sUSD and withdraw collateral in one operation.
    #[odra(non_reentrant)]
    pub fn redeem_collateral_for_synthetic(
        &mut self,
        asset: Address,
        collateral_amount: U256,
        burn_amount: U256,
    ) {
        let caller = self.env().caller();
        self.burn_internal(caller, caller, burn_amount);
        self.withdraw_internal(caller, caller, asset, collateral_amount);
        self.require_health_factor(caller);
    }

    /// Liquidate an undercollateralized account.
    ///
    /// The caller covers `debt_to_cover` (USD value, 1e18 scale) of the
    /// target's debt with their own sUSD and seizes the equivalent amount of
    /// `asset` plus a 10% bonus from the target's collateral.
    ///
    /// Known limitation: once aggregate collateral value falls to or below
    /// aggregate debt value there is no bonus margin left to pay liquidators,
    /// and this flow provides no fallback for that regime.
    #[odra(non_reentrant)]
    pub fn liquidate(&mut self, asset: Address, target: Address, debt_to_cover: U256) {
        let liquidator = self.env().caller();
        if debt_to_cover.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let starting_health_factor = self.health_factor_of(target);
        if starting_health_factor >= U256::from(MIN_HEALTH_FACTOR) {
            self.env().revert(EngineError::HealthFactorOk);
        }

        let price = self.asset_price(asset);
        let token_amount = health::token_amount_from_usd(price, debt_to_cover);
        // A cover so small it floors to zero collateral would burn sUSD for
        // nothing.
        if token_amount.is_zero() {
            self.env().revert(EngineError::DebtCoverTooSmall);
        }
        let bonus =
            token_amount * U256::from(LIQUIDATION_BONUS) / U256::from(LIQUIDATION_PRECISION);

        // Seize collateral to the liquidator, then retire the covered debt
        // with the liquidator's sUSD.
        self.withdraw_internal(target, liquidator, asset, token_amount + bonus);
        self.burn_internal(target, liquidator, debt_to_cover);

        let ending_health_factor = self.health_factor_of(target);
        if ending_health_factor <= starting_health_factor {
            self.env().revert(EngineError::HealthFactorNotImproved);
        }

        self.require_health_factor(liquidator);
    }

    // ========== Query Surface ==========

    /// Outstanding sUSD debt of an account.
    pub fn get_debt(&self, account: Address) -> U256 {
        self.debt_minted.get(&account).unwrap_or(U256::zero())
    }

    /// Deposited amount of one asset for an account.
    pub fn get_collateral_balance(&self, account: Address, asset: Address) -> U256 {
        self.collateral_deposited
            .get(&(account, asset))
            .unwrap_or(U256::zero())
    }

    /// Total USD value (1e18 scale) of an account's collateral, priced live
    /// across every registered asset. Never cached.
    pub fn get_account_collateral_value(&self, account: Address) -> U256 {
        self.collateral_value_of(account)
    }

    /// Current health factor of an account.
    pub fn get_health_factor(&self, account: Address) -> U256 {
        self.health_factor_of(account)
    }

    /// Debt and collateral value of an account in one call.
    pub fn get_account_information(&self, account: Address) -> (U256, U256) {
        (self.get_debt(account), self.collateral_value_of(account))
    }

    /// Ordered registry of accepted reserve assets.
    pub fn get_collateral_assets(&self) -> Vec<Address> {
        self.collateral_assets.get_or_default()
    }

    /// Price feed registered for an asset.
    pub fn get_price_feed(&self, asset: Address) -> Option<Address> {
        self.price_feeds.get(&asset)
    }

    /// USD value (1e18 scale) of `amount` of `asset` at the live price.
    pub fn get_usd_value(&self, asset: Address, amount: U256) -> U256 {
        health::usd_value(self.asset_price(asset), amount)
    }

    /// Amount of `asset` worth `usd_amount` (1e18 scale) at the live price.
    pub fn get_token_amount_from_usd(&self, asset: Address, usd_amount: U256) -> U256 {
        health::token_amount_from_usd(self.asset_price(asset), usd_amount)
    }

    /// sUSD token contract address.
    pub fn get_synthetic_token(&self) -> Address {
        self.synthetic_token
            .get_or_revert_with(EngineError::Unauthorized)
    }

    /// Protocol constants.
    pub fn get_protocol_params(&self) -> ProtocolParams {
        ProtocolParams {
            precision: U256::from(PRECISION),
            liquidation_threshold: U256::from(LIQUIDATION_THRESHOLD),
            liquidation_precision: U256::from(LIQUIDATION_PRECISION),
            liquidation_bonus: U256::from(LIQUIDATION_BONUS),
            min_health_factor: U256::from(MIN_HEALTH_FACTOR),
            stale_timeout_ms: STALE_TIMEOUT_MS,
        }
    }

    // ========== Collateral Ledger ==========

    fn deposit_internal(&mut self, account: Address, asset: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        self.require_allowed(asset);

        let current = self.get_collateral_balance(account, asset);
        self.collateral_deposited
            .set(&(account, asset), current + amount);
        self.env().emit_event(CollateralDeposited {
            account,
            asset,
            amount,
        });

        let engine = self.env().self_address();
        let args = runtime_args! {
            "owner" => account,
            "recipient" => engine,
            "amount" => amount
        };
        let call_def = CallDef::new("transfer_from", true, args);
        let success: bool = self.env().call_contract(asset, call_def);
        if !success {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    /// Decrease `from`'s position and pay the tokens out to `to`. Shared by
    /// self-redemption and liquidation seizure.
    fn withdraw_internal(&mut self, from: Address, to: Address, asset: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        self.require_allowed(asset);

        let current = self.get_collateral_balance(from, asset);
        if current < amount {
            self.env().revert(EngineError::InsufficientCollateral);
        }
        self.collateral_deposited.set(&(from, asset), current - amount);
        self.env().emit_event(CollateralRedeemed {
            from,
            to,
            asset,
            amount,
        });

        let args = runtime_args! {
            "recipient" => to,
            "amount" => amount
        };
        let call_def = CallDef::new("transfer", true, args);
        let success: bool = self.env().call_contract(asset, call_def);
        if !success {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    /// Live USD value of every registered asset held by `account`. Reads the
    /// price for each asset unconditionally, so one stale feed freezes the
    /// whole valuation.
    fn collateral_value_of(&self, account: Address) -> U256 {
        let assets = self.collateral_assets.get_or_default();
        let mut total = U256::zero();
        for asset in assets {
            let amount = self.get_collateral_balance(account, asset);
            total = total + health::usd_value(self.asset_price(asset), amount);
        }
        total
    }

    // ========== Debt Ledger ==========

    fn mint_internal(&mut self, account: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let debt = self.get_debt(account);
        self.debt_minted.set(&account, debt + amount);
        self.require_health_factor(account);

        let token = self.get_synthetic_token();
        let args = runtime_args! {
            "to" => account,
            "amount" => amount
        };
        let call_def = CallDef::new("mint", true, args);
        let success: bool = self.env().call_contract(token, call_def);
        if !success {
            self.env().revert(EngineError::MintFailed);
        }
    }

    /// Retire `amount` of `on_behalf_of`'s debt, paid with `payer`'s sUSD.
    fn burn_internal(&mut self, on_behalf_of: Address, payer: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let debt = self.get_debt(on_behalf_of);
        if debt < amount {
            self.env().revert(EngineError::BurnExceedsDebt);
        }
        self.debt_minted.set(&on_behalf_of, debt - amount);

        let token = self.get_synthetic_token();
        let pull_args = runtime_args! {
            "from" => payer,
            "amount" => amount
        };
        let pull_call = CallDef::new("transfer_in", true, pull_args);
        let success: bool = self.env().call_contract(token, pull_call);
        if !success {
            self.env().revert(EngineError::TransferFailed);
        }

        let burn_args = runtime_args! {
            "amount" => amount
        };
        let burn_call = CallDef::new("burn", true, burn_args);
        self.env().call_contract::<()>(token, burn_call);
    }

    // ========== Internal Helpers ==========

    fn require_allowed(&self, asset: Address) {
        if self.price_feeds.get(&asset).is_none() {
            self.env().revert(EngineError::AssetNotAllowed);
        }
    }

    fn asset_price(&self, asset: Address) -> U256 {
        let feed = match self.price_feeds.get(&asset) {
            Some(feed) => feed,
            None => self.env().revert(EngineError::AssetNotAllowed),
        };
        OracleAdapter::checked_price(&self.env(), feed)
    }

    fn health_factor_of(&self, account: Address) -> U256 {
        health::health_factor(self.get_debt(account), self.collateral_value_of(account))
    }

    fn require_health_factor(&self, account: Address) {
        if self.health_factor_of(account) < U256::from(MIN_HEALTH_FACTOR) {
            self.env().revert(EngineError::HealthFactorBelowMinimum);
        }
    }
}
