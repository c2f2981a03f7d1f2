//! sUSD Synthetic Token Contract
//!
//! CEP-18 style token whose supply is controlled exclusively by the
//! collateral engine. Users hold and transfer sUSD freely; minting, burn-path
//! custody and burning are engine-only capabilities wired once by the
//! deployer.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::EngineError;

/// sUSD Synthetic Token Contract
#[odra::module]
pub struct SyntheticUsd {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals (18 for sUSD)
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Deployer, allowed to wire the engine once
    admin: Var<Address>,
    /// Collateral engine, sole holder of the mint/burn capability
    engine: Var<Option<Address>>,
}

#[odra::module]
impl SyntheticUsd {
    /// Initialize the synthetic token
    pub fn init(&mut self) {
        self.name.set(String::from("Synthetic USD"));
        self.symbol.set(String::from("sUSD"));
        self.decimals.set(18);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
        self.engine.set(None);
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_else(|| String::from("Synthetic USD"))
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_else(|| String::from("sUSD"))
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(EngineError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Engine Capability (Restricted) ==========

    /// Wire the engine address (deployer only, once).
    pub fn set_engine(&mut self, engine: Address) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
        if self.engine.get().flatten().is_some() {
            self.env().revert(EngineError::Unauthorized);
        }
        self.engine.set(Some(engine));
    }

    /// Get the wired engine address
    pub fn get_engine(&self) -> Option<Address> {
        self.engine.get().flatten()
    }

    /// Mint new tokens to an account (engine only)
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_engine();

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);
        self.total_supply.set(self.total_supply() + amount);
        true
    }

    /// Pull `amount` from `from` into engine custody for burning (engine only)
    pub fn transfer_in(&mut self, from: Address, amount: U256) -> bool {
        self.require_engine();

        let engine = self.env().caller();
        self.transfer_internal(from, engine, amount);
        true
    }

    /// Burn tokens from the caller's balance (engine only)
    pub fn burn(&mut self, amount: U256) {
        self.require_engine();

        let caller = self.env().caller();
        let current_balance = self.balance_of(caller);
        if current_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.balances.set(&caller, current_balance - amount);
        self.total_supply.set(self.total_supply() - amount);
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }

    fn require_engine(&self) {
        let caller = self.env().caller();
        if self.engine.get().flatten() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
