//! Admin-set price source.
//!
//! Serves one collateral price (USD per whole unit, scaled by 1e18) to the
//! engine through the `PriceFeed` interface.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;
use crate::events::PriceUpdated;

/// Fixed price feed contract
#[odra::module(events = [PriceUpdated])]
pub struct FixedPriceFeed {
    /// Current price, scaled by 1e18
    price: Var<U256>,
    /// Admin (deployer)
    admin: Var<Address>,
}

#[odra::module]
impl FixedPriceFeed {
    /// Initialize with a starting price; the caller becomes admin
    pub fn init(&mut self, price: U256) {
        if price.is_zero() {
            self.env().revert(EngineError::InvalidConfig);
        }
        self.admin.set(self.env().caller());
        self.price.set(price);
    }

    /// Current price
    pub fn get_price(&self) -> U256 {
        self.price.get().unwrap_or(U256::zero())
    }

    /// Update the price (admin only). Zero is allowed and reads as unavailable.
    pub fn set_price(&mut self, price: U256) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
        self.price.set(price);
        self.env().emit_event(PriceUpdated { price });
    }

    /// Get the admin address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }
}
