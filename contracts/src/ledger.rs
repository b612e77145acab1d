//! Collateral and debt ledger.
//!
//! Embedded in the engine as a submodule. Entries default to zero on first
//! read and are never removed. Mutations are checked but not transactional on
//! their own; the engine composes them and runs the solvency check afterwards.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;

/// Per-user collateral and debt balances plus the depositor registry
#[odra::module]
pub struct CollateralLedger {
    /// Whole-unit collateral per user
    collateral: Mapping<Address, U256>,
    /// Minted derivative-token debt per user
    minted: Mapping<Address, U256>,
    /// Depositor registry, append-only (index -> user)
    users: Mapping<u64, Address>,
    /// Registry length
    user_count: Var<u64>,
}

#[odra::module]
impl CollateralLedger {
    /// Collateral balance of a user
    pub fn collateral_of(&self, user: Address) -> U256 {
        self.collateral.get(&user).unwrap_or(U256::zero())
    }

    /// Minted debt of a user
    pub fn minted_of(&self, user: Address) -> U256 {
        self.minted.get(&user).unwrap_or(U256::zero())
    }

    pub fn increase_collateral(&mut self, user: Address, amount: U256) {
        let current = self.collateral_of(user);
        let updated = match current.checked_add(amount) {
            Some(v) => v,
            None => self.env().revert(EngineError::Overflow),
        };
        self.collateral.set(&user, updated);
    }

    pub fn decrease_collateral(&mut self, user: Address, amount: U256) {
        let current = self.collateral_of(user);
        let updated = match current.checked_sub(amount) {
            Some(v) => v,
            None => self.env().revert(EngineError::Underflow),
        };
        self.collateral.set(&user, updated);
    }

    pub fn increase_debt(&mut self, user: Address, amount: U256) {
        let current = self.minted_of(user);
        let updated = match current.checked_add(amount) {
            Some(v) => v,
            None => self.env().revert(EngineError::Overflow),
        };
        self.minted.set(&user, updated);
    }

    pub fn decrease_debt(&mut self, user: Address, amount: U256) {
        let current = self.minted_of(user);
        let updated = match current.checked_sub(amount) {
            Some(v) => v,
            None => self.env().revert(EngineError::Underflow),
        };
        self.minted.set(&user, updated);
    }

    /// Append a user to the registry. Repeat depositors are appended again.
    pub fn register_user(&mut self, user: Address) {
        let count = self.user_count();
        self.users.set(&count, user);
        self.user_count.set(count + 1);
    }

    /// Registry length
    pub fn user_count(&self) -> u64 {
        self.user_count.get().unwrap_or(0)
    }

    /// Registry entry at `index` (0-based)
    pub fn user_at(&self, index: u64) -> Option<Address> {
        self.users.get(&index)
    }
}
