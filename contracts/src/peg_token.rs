//! Pegged derivative token.
//!
//! Mint/burn token controlled by authorized minters (the collateral engine).
//! Balances and total supply are mirrored into CEP-18 named keys and
//! dictionaries so Casper wallets can read them.

use odra::prelude::*;
use odra::casper_types::{U256, Key};
use odra::casper_types::bytesrepr::ToBytes;
use crate::errors::EngineError;
use crate::events::{Burned, Minted, MinterUpdated};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

const CEP18_NAME_KEY: &str = "name";
const CEP18_SYMBOL_KEY: &str = "symbol";
const CEP18_DECIMALS_KEY: &str = "decimals";
const CEP18_TOTAL_SUPPLY_KEY: &str = "total_supply";
const CEP18_BALANCES_DICT: &str = "balances";

/// Pegged derivative token
#[odra::module(events = [Minted, Burned, MinterUpdated])]
pub struct PegToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Admin (deployer)
    admin: Var<Address>,
    /// Authorized minters
    authorized_minters: Mapping<Address, bool>,
    /// Supply cap (0 = unlimited)
    supply_cap: Var<U256>,
}

#[odra::module]
impl PegToken {
    /// Initialize the token; the caller becomes admin
    pub fn init(&mut self, name: String, symbol: String, decimals: u8, supply_cap: U256) {
        self.name.set(name.clone());
        self.symbol.set(symbol.clone());
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.supply_cap.set(supply_cap);
        self.admin.set(self.env().caller());
        self.env().init_dictionary(CEP18_BALANCES_DICT);
        self.env().set_named_value(CEP18_NAME_KEY, name);
        self.env().set_named_value(CEP18_SYMBOL_KEY, symbol);
        self.env().set_named_value(CEP18_DECIMALS_KEY, decimals);
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, U256::zero());
    }

    // ========== Metadata ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(0)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    // ========== Protocol Functions (Restricted) ==========

    /// Mint new tokens (authorized minters only).
    ///
    /// Returns `false` without minting if the supply cap would be exceeded.
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_authorized_minter();

        let current_supply = self.total_supply();
        let new_supply = match current_supply.checked_add(amount) {
            Some(v) => v,
            None => return false,
        };
        let cap = self.get_supply_cap();
        if !cap.is_zero() && new_supply > cap {
            return false;
        }

        let new_balance = self.balance_of(to) + amount;
        self.balances.set(&to, new_balance);
        self.set_balance_cep18(to, new_balance);

        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);

        self.env().emit_event(Minted { to, amount });
        true
    }

    /// Burn tokens held by `from` (authorized minters only)
    pub fn burn_from(&mut self, from: Address, amount: U256) {
        self.require_authorized_minter();

        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        let new_balance = current_balance - amount;
        self.balances.set(&from, new_balance);
        self.set_balance_cep18(from, new_balance);

        let new_supply = self.total_supply() - amount;
        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);

        self.env().emit_event(Burned { from, amount });
    }

    // ========== Admin Functions ==========

    /// Add an authorized minter (admin only)
    pub fn add_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, true);
        self.env().emit_event(MinterUpdated { minter, enabled: true });
    }

    /// Remove an authorized minter (admin only)
    pub fn remove_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, false);
        self.env().emit_event(MinterUpdated { minter, enabled: false });
    }

    /// Check if an account is an authorized minter
    pub fn is_minter(&self, account: Address) -> bool {
        self.authorized_minters.get(&account).unwrap_or(false)
    }

    /// Set the supply cap, 0 for unlimited (admin only)
    pub fn set_supply_cap(&mut self, cap: U256) {
        self.require_admin();
        self.supply_cap.set(cap);
    }

    /// Get the supply cap
    pub fn get_supply_cap(&self) -> U256 {
        self.supply_cap.get().unwrap_or(U256::zero())
    }

    /// Get the admin address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ========== Internal Functions ==========

    fn set_balance_cep18(&self, owner: Address, amount: U256) {
        let key = Self::cep18_balance_key(owner);
        self.env().set_dictionary_value(CEP18_BALANCES_DICT, key.as_bytes(), amount);
    }

    fn set_total_supply_cep18(&self, amount: U256) {
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, amount);
    }

    fn cep18_balance_key(owner: Address) -> String {
        let key = Key::from(owner);
        let bytes = key.to_bytes().unwrap_or_default();
        BASE64_STANDARD.encode(bytes)
    }

    fn require_authorized_minter(&self) {
        let caller = self.env().caller();
        if !self.is_minter(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }

    fn require_admin(&self) {
        let caller = self.env().caller();
        if self.admin.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
