//! Collateral Engine Contracts
//!
//! Collateral-backed issuance of a derivative token pegged 1:1 to a
//! reference unit of value.
//!
//! ## Architecture
//!
//! - **CollateralEngine**: deposit / mint / burn / redeem, gated by the health factor
//! - **CollateralLedger**: per-user collateral and debt balances (engine submodule)
//! - **PegToken**: derivative token with engine-controlled mint/burn
//! - **FixedPriceFeed**: optional injected price source
//!
//! ## Solvency
//!
//! Only 50% of collateral value counts toward the health factor. Any
//! mint, burn or redeem that leaves the caller below a health factor of 1
//! reverts as a whole.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod events;
pub mod health;
pub mod interfaces;
pub mod types;

// Contract modules
pub mod ledger;
pub mod engine;
pub mod peg_token;
pub mod price_feed;
