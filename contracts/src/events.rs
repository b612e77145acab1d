//! Events emitted by the engine, the derivative token and the price feed.

use odra::prelude::*;
use odra::casper_types::U256;

/// Collateral locked; `amount` is the raw attached value.
#[odra::event]
pub struct CollateralDeposited {
    pub user: Address,
    pub amount: U256,
}

/// Collateral released back to the user, in whole units.
#[odra::event]
pub struct CollateralRedeemed {
    pub user: Address,
    pub amount: U256,
}

#[odra::event]
pub struct DebtMinted {
    pub user: Address,
    pub amount: U256,
}

#[odra::event]
pub struct DebtBurned {
    pub user: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Minted {
    pub to: Address,
    pub amount: U256,
}

#[odra::event]
pub struct Burned {
    pub from: Address,
    pub amount: U256,
}

#[odra::event]
pub struct MinterUpdated {
    pub minter: Address,
    pub enabled: bool,
}

#[odra::event]
pub struct PriceUpdated {
    pub price: U256,
}
