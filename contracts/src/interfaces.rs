//! External collaborators of the engine.
//!
//! The engine only needs mint/burn from the derivative token and a spot
//! price from the price source; both are reached through these traits.

use odra::prelude::*;
use odra::casper_types::U256;

/// Token-mechanics collaborator for the derivative token
#[odra::external_contract]
pub trait PegMintable {
    /// Mint `amount` to `to`. Returns `false` when nothing was minted.
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    /// Burn `amount` held by `from`.
    fn burn_from(&mut self, from: Address, amount: U256);
}

/// Price source for the collateral asset
#[odra::external_contract]
pub trait PriceFeed {
    /// USD per whole collateral unit, scaled by 1e18
    fn get_price(&self) -> U256;
}
