//! Read-side types returned by the engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// Collateral value and debt for a user
#[odra::odra_type]
pub struct AccountInfo {
    /// Collateral value in the reference unit
    pub collateral_value_usd: U256,
    /// Minted derivative-token debt
    pub minted_debt: U256,
}

/// Account info plus the derived health factor
#[odra::odra_type]
pub struct UserInfo {
    /// Collateral value in the reference unit
    pub collateral_value_usd: U256,
    /// Minted derivative-token debt
    pub minted_debt: U256,
    /// Health factor (`U256::MAX` when there is no debt)
    pub health_factor: U256,
}
