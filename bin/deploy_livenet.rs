//! Deploy the collateral engine to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional overrides:
//!   COLLATERAL_SCALE=1000000000   (raw units per whole collateral unit, default 1e18)
//!   PEG_SUPPLY_CAP=0              (0 = unlimited)
//!   USE_PRICE_FEED=true           (deploy a FixedPriceFeed at $1.00)

use odra::casper_types::U256;
use odra::host::{Deployer, HostRef};
use odra::prelude::*;

use collateral_engine_contracts::engine::{CollateralEngine, CollateralEngineInitArgs};
use collateral_engine_contracts::health::PRECISION;
use collateral_engine_contracts::peg_token::{PegToken, PegTokenInitArgs};
use collateral_engine_contracts::price_feed::{FixedPriceFeed, FixedPriceFeedInitArgs};

fn env_u256(name: &str, default: U256) -> U256 {
    std::env::var(name)
        .ok()
        .and_then(|v| U256::from_dec_str(v.trim()).ok())
        .unwrap_or(default)
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Collateral Engine Livenet Deployment ===");
    println!();

    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    let collateral_scale = env_u256("COLLATERAL_SCALE", U256::from(PRECISION));
    let supply_cap = env_u256("PEG_SUPPLY_CAP", U256::zero());
    let use_price_feed = std::env::var("USE_PRICE_FEED")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    println!("Collateral scale: {}", collateral_scale);
    println!("Supply cap:       {}", supply_cap);
    println!("Price feed:       {}", if use_price_feed { "FixedPriceFeed" } else { "fixed 1:1" });
    println!();

    // 1. PegToken
    println!("Deploying PegToken...");
    let mut token = PegToken::deploy(
        &env,
        PegTokenInitArgs {
            name: String::from("Pegged USD"),
            symbol: String::from("pUSD"),
            decimals: 18,
            supply_cap,
        },
    );
    let token_addr = token.address().clone();
    println!("PegToken deployed at: {:?}", token_addr);

    // 2. FixedPriceFeed (optional)
    let price_feed_addr = if use_price_feed {
        println!("Deploying FixedPriceFeed...");
        let feed = FixedPriceFeed::deploy(
            &env,
            FixedPriceFeedInitArgs {
                price: U256::from(PRECISION),
            },
        );
        let addr = feed.address().clone();
        println!("FixedPriceFeed deployed at: {:?}", addr);
        Some(addr)
    } else {
        None
    };

    // 3. CollateralEngine
    println!("Deploying CollateralEngine...");
    let engine = CollateralEngine::deploy(
        &env,
        CollateralEngineInitArgs {
            token: token_addr,
            collateral_scale,
            price_feed: price_feed_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("CollateralEngine deployed at: {:?}", engine_addr);

    println!();

    // Authorize the engine to mint/burn the pegged token
    println!("Configuring PegToken -> CollateralEngine minter...");
    token.add_minter(engine_addr);
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  PegToken:          {:?}", token_addr);
    if let Some(addr) = price_feed_addr {
        println!("  FixedPriceFeed:    {:?}", addr);
    }
    println!("  CollateralEngine:  {:?}", engine_addr);
}
