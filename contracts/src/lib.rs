//! Casper-Synth Contracts
//!
//! Collateral-backed synthetic asset engine for Casper: users lock accepted
//! CEP-18 reserve tokens, mint the sUSD synthetic unit against them, and the
//! engine enforces at least 200% collateralization, liquidating
//! undercollateralized accounts at a 10% bonus.
//!
//! ## Architecture
//!
//! - **CollateralEngine**: deposit/mint/redeem/burn/liquidate orchestration,
//!   collateral and debt ledgers, invariant enforcement
//! - **SyntheticUsd (sUSD)**: CEP-18 style token with engine-exclusive
//!   mint/burn capability
//! - **ManualPriceFeed**: operator-updated price rounds, one per reserve asset
//! - **OracleAdapter**: staleness guard over feeds (3h trust window)
//!
//! ## Fail-Closed Pricing
//!
//! Price reads older than the trust window revert rather than fall back to a
//! cached or default value: the engine prefers freezing an asset's
//! valuation-dependent operations over acting on data it cannot trust.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod events;
pub mod health;
pub mod types;

// Contract modules
pub mod engine;
pub mod oracle;
pub mod price_feed;
pub mod synthetic_token;
