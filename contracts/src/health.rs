//! Health-factor math.
//!
//! Pure functions over ledger values; the engine reads the ledger, calls
//! these, and reverts on any `Err`.
//!
//! - Collateral value: `collateral * price / PRECISION`
//! - Health factor: `collateral_value * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION / debt`
//! - Zero debt maps to `U256::MAX`
//!
//! All arithmetic is checked: an overflow is an error, never a wrap.

use odra::casper_types::U256;
use crate::errors::EngineError;

/// Fixed-point precision (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Reference price: 1 collateral unit = 1 USD, scaled by PRECISION
pub const REFERENCE_PRICE: u128 = PRECISION;

/// Share of nominal collateral value counted toward solvency (50%)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for LIQUIDATION_THRESHOLD
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Minimum health factor a position with debt must keep
pub const MIN_HEALTH_FACTOR: u64 = 1;

/// Value of `amount` whole collateral units in the reference unit.
///
/// `price` is USD per whole unit, scaled by [`PRECISION`].
pub fn value_in_reference_unit(amount: U256, price: U256) -> Result<U256, EngineError> {
    let scaled = amount.checked_mul(price).ok_or(EngineError::Overflow)?;
    Ok(scaled / U256::from(PRECISION))
}

/// Health factor for a position.
///
/// Both multiplications happen before any division.
pub fn health_factor(collateral_value: U256, debt: U256) -> Result<U256, EngineError> {
    if debt.is_zero() {
        return Ok(U256::MAX);
    }

    let adjusted = collateral_value
        .checked_mul(U256::from(LIQUIDATION_THRESHOLD))
        .ok_or(EngineError::Overflow)?;

    Ok(adjusted / U256::from(LIQUIDATION_PRECISION) / debt)
}

/// Whether a health factor satisfies [`MIN_HEALTH_FACTOR`].
pub fn is_healthy(health_factor: U256) -> bool {
    health_factor >= U256::from(MIN_HEALTH_FACTOR)
}
