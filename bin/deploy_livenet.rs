//! Deploy contracts to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!   SYNTH_RESERVE_ASSET=hash-... (CEP-18 reserve token to accept as collateral)

use odra::host::{Deployer, HostRef, NoArgs};
use odra::prelude::*;

use casper_synth_contracts::engine::{CollateralEngine, CollateralEngineInitArgs};
use casper_synth_contracts::price_feed::{ManualPriceFeed, ManualPriceFeedInitArgs};
use casper_synth_contracts::synthetic_token::SyntheticUsd;

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Casper-Synth Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // The reserve asset must already exist on chain.
    let reserve_asset: Address = std::env::var("SYNTH_RESERVE_ASSET")
        .ok()
        .and_then(|v| v.parse().ok())
        .expect("SYNTH_RESERVE_ASSET must hold a valid contract address");

    // Initial answer for the feed: $2000.00 with 8 decimals. The feeder is
    // expected to push a fresh round right after deployment anyway.
    let initial_answer: i64 = 200_000_000_000;

    // ==================== Phase 1: Independent Contracts ====================
    println!("=== Phase 1: Deploying Independent Contracts ===");
    println!();

    // 1. ManualPriceFeed for the reserve asset
    println!("Deploying ManualPriceFeed...");
    let feed = ManualPriceFeed::deploy(
        &env,
        ManualPriceFeedInitArgs {
            operator: deployer,
            initial_answer,
        },
    );
    let feed_addr = feed.address().clone();
    println!("ManualPriceFeed deployed at: {:?}", feed_addr);

    // 2. SyntheticUsd (sUSD)
    println!("Deploying SyntheticUsd...");
    let mut susd = SyntheticUsd::deploy(&env, NoArgs);
    let susd_addr = susd.address().clone();
    println!("SyntheticUsd deployed at: {:?}", susd_addr);

    println!();

    // ==================== Phase 2: Engine ====================
    println!("=== Phase 2: Deploying Engine ===");
    println!();

    // 3. CollateralEngine over the registry
    println!("Deploying CollateralEngine...");
    let engine = CollateralEngine::deploy(
        &env,
        CollateralEngineInitArgs {
            assets: vec![reserve_asset],
            price_feeds: vec![feed_addr],
            synthetic_token: susd_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("CollateralEngine deployed at: {:?}", engine_addr);

    println!();

    // ==================== Phase 3: Cross-contract Configuration ====================
    println!("=== Phase 3: Cross-contract Configuration ===");
    println!();

    // Hand the mint/burn capability to the engine. One-shot, irreversible.
    println!("Configuring SyntheticUsd -> CollateralEngine link...");
    susd.set_engine(engine_addr);
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  ManualPriceFeed:   {:?}", feed_addr);
    println!("  SyntheticUsd:      {:?}", susd_addr);
    println!("  CollateralEngine:  {:?}", engine_addr);
}
