//! Collateral engine.
//!
//! Users lock native collateral and mint the derivative token against it.
//! Every mutating entry point updates the ledger first and finishes with a
//! health-factor check on the caller; a failed check reverts the whole call,
//! including token mints/burns, native transfers and emitted events.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use odra::ContractRef;
use crate::errors::EngineError;
use crate::events::{CollateralDeposited, CollateralRedeemed, DebtBurned, DebtMinted};
use crate::health::{
    self, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR, PRECISION,
    REFERENCE_PRICE,
};
use crate::interfaces::{PegMintableContractRef, PriceFeedContractRef};
use crate::ledger::CollateralLedger;
use crate::types::{AccountInfo, UserInfo};

/// Collateral engine contract
#[odra::module(events = [CollateralDeposited, CollateralRedeemed, DebtMinted, DebtBurned])]
pub struct CollateralEngine {
    /// Collateral/debt balances and depositor registry
    ledger: SubModule<CollateralLedger>,
    /// Derivative token contract
    token: Var<Address>,
    /// Optional price source; `None` means the fixed reference price
    price_feed: Var<Option<Address>>,
    /// Raw base units per whole collateral unit
    collateral_scale: Var<U256>,
}

#[odra::module]
impl CollateralEngine {
    /// Initialize the engine
    ///
    /// # Arguments
    /// * `token` - Derivative token; the engine must be one of its minters
    /// * `collateral_scale` - Raw base units per whole collateral unit
    /// * `price_feed` - Price source, or `None` for the fixed 1:1 price
    pub fn init(&mut self, token: Address, collateral_scale: U256, price_feed: Option<Address>) {
        if collateral_scale.is_zero() {
            self.env().revert(EngineError::InvalidConfig);
        }
        self.token.set(token);
        self.collateral_scale.set(collateral_scale);
        self.price_feed.set(price_feed);
    }

    // ========== Transitions ==========

    /// Deposit `collateral_amount` whole units of collateral.
    ///
    /// The attached value must cover `collateral_amount * collateral_scale`.
    /// Payable entry points must not take an argument named `amount`; the
    /// host passes the attached value under that name.
    #[odra(payable, non_reentrant)]
    pub fn deposit(&mut self, collateral_amount: U256) {
        self.deposit_internal(collateral_amount);
    }

    /// Deposit collateral and mint against it in one call.
    #[odra(payable, non_reentrant)]
    pub fn deposit_and_mint(&mut self, collateral_amount: U256, mint_amount: U256) {
        if collateral_amount.is_zero() || mint_amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        self.deposit_internal(collateral_amount);
        self.mint_internal(mint_amount);
    }

    /// Mint `amount` of the derivative token, spending the same amount of collateral.
    #[odra(non_reentrant)]
    pub fn mint(&mut self, amount: U256) {
        self.mint_internal(amount);
    }

    /// Burn `amount` of the derivative token and restore the same amount of collateral.
    #[odra(non_reentrant)]
    pub fn burn(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        let caller = self.env().caller();

        self.ledger.decrease_debt(caller, amount);
        self.token_ref().burn_from(caller, amount);
        self.ledger.increase_collateral(caller, amount);

        self.env().emit_event(DebtBurned { user: caller, amount });

        // Burning cannot lower the health factor; checked anyway.
        self.assert_healthy(caller);
    }

    /// Withdraw `amount` whole units of collateral back to the caller.
    #[odra(non_reentrant)]
    pub fn redeem(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        let caller = self.env().caller();

        if self.ledger.collateral_of(caller) < amount {
            self.env().revert(EngineError::NotEnoughCollateral);
        }
        let payout = match amount.checked_mul(self.get_collateral_scale()) {
            Some(v) => u256_to_u512(v),
            None => self.env().revert(EngineError::Overflow),
        };

        self.ledger.decrease_collateral(caller, amount);
        self.env().emit_event(CollateralRedeemed { user: caller, amount });

        if self.env().self_balance() < payout {
            self.env().revert(EngineError::TransferFailed);
        }
        self.env().transfer_tokens(&caller, &payout);

        self.assert_healthy(caller);
    }

    // ========== Views ==========

    /// Collateral balance in whole units
    pub fn get_balance(&self, user: Address) -> U256 {
        self.ledger.collateral_of(user)
    }

    /// Minted debt
    pub fn get_minted(&self, user: Address) -> U256 {
        self.ledger.minted_of(user)
    }

    /// Health factor (`U256::MAX` when the user has no debt)
    pub fn get_health_factor(&self, user: Address) -> U256 {
        self.health_factor_of(user)
    }

    /// Collateral value and debt
    pub fn get_account_info(&self, user: Address) -> AccountInfo {
        AccountInfo {
            collateral_value_usd: self.collateral_value(self.ledger.collateral_of(user)),
            minted_debt: self.ledger.minted_of(user),
        }
    }

    /// Collateral value, debt and health factor
    pub fn get_user_info(&self, user: Address) -> UserInfo {
        let account = self.get_account_info(user);
        let health_factor = self.health_factor_from(account.collateral_value_usd, account.minted_debt);
        UserInfo {
            collateral_value_usd: account.collateral_value_usd,
            minted_debt: account.minted_debt,
            health_factor,
        }
    }

    /// Number of registry entries. Counts every deposit, not distinct users.
    pub fn get_total_users_in_the_protocol(&self) -> u64 {
        self.ledger.user_count()
    }

    /// Registry entry at `index`
    pub fn get_user_at(&self, index: u64) -> Option<Address> {
        self.ledger.user_at(index)
    }

    /// Value of `amount` whole collateral units in the reference unit
    pub fn calculate_value_in_reference_unit(&self, amount: U256) -> U256 {
        self.collateral_value(amount)
    }

    // ========== Configuration getters ==========

    /// Get the derivative token address
    pub fn get_token(&self) -> Option<Address> {
        self.token.get()
    }

    /// Get the injected price source, if any
    pub fn get_price_feed(&self) -> Option<Address> {
        self.price_feed.get().flatten()
    }

    /// Get raw base units per whole collateral unit
    pub fn get_collateral_scale(&self) -> U256 {
        self.collateral_scale.get().unwrap_or(U256::from(PRECISION))
    }

    /// Price currently used for valuation, scaled by 1e18
    pub fn get_reference_price(&self) -> U256 {
        self.reference_price()
    }

    /// Get the liquidation threshold (percent of collateral value counted)
    pub fn get_liquidation_threshold(&self) -> u64 {
        LIQUIDATION_THRESHOLD
    }

    /// Get the liquidation threshold denominator
    pub fn get_liquidation_precision(&self) -> u64 {
        LIQUIDATION_PRECISION
    }

    /// Get the minimum health factor
    pub fn get_min_health_factor(&self) -> u64 {
        MIN_HEALTH_FACTOR
    }

    /// Get the fixed-point precision (1e18)
    pub fn get_precision(&self) -> U256 {
        U256::from(PRECISION)
    }

    // ========== Internal helpers ==========

    fn deposit_internal(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        let caller = self.env().caller();
        let scale = self.get_collateral_scale();

        let attached = match u512_to_u256(self.env().attached_value()) {
            Some(v) => v,
            None => self.env().revert(EngineError::Overflow),
        };
        let required = match amount.checked_mul(scale) {
            Some(v) => v,
            None => self.env().revert(EngineError::Overflow),
        };
        if attached < required {
            self.env().revert(EngineError::IncorrectCollateralAmount);
        }

        self.ledger.increase_collateral(caller, attached / scale);
        self.ledger.register_user(caller);

        self.env().emit_event(CollateralDeposited {
            user: caller,
            amount: attached,
        });
    }

    fn mint_internal(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        let caller = self.env().caller();

        if self.ledger.collateral_of(caller) < amount {
            self.env().revert(EngineError::InsufficientCollateral);
        }

        self.ledger.increase_debt(caller, amount);
        if !self.token_ref().mint(caller, amount) {
            self.env().revert(EngineError::MintingFailed);
        }
        self.ledger.decrease_collateral(caller, amount);

        self.env().emit_event(DebtMinted { user: caller, amount });

        self.assert_healthy(caller);
    }

    fn assert_healthy(&self, user: Address) {
        if !health::is_healthy(self.health_factor_of(user)) {
            self.env().revert(EngineError::HealthFactorBroken);
        }
    }

    fn health_factor_of(&self, user: Address) -> U256 {
        let value = self.collateral_value(self.ledger.collateral_of(user));
        self.health_factor_from(value, self.ledger.minted_of(user))
    }

    fn health_factor_from(&self, collateral_value: U256, debt: U256) -> U256 {
        match health::health_factor(collateral_value, debt) {
            Ok(hf) => hf,
            Err(e) => self.env().revert(e),
        }
    }

    fn collateral_value(&self, amount: U256) -> U256 {
        match health::value_in_reference_unit(amount, self.reference_price()) {
            Ok(v) => v,
            Err(e) => self.env().revert(e),
        }
    }

    fn reference_price(&self) -> U256 {
        match self.price_feed.get().flatten() {
            Some(feed) => {
                let price = PriceFeedContractRef::new(self.env(), feed).get_price();
                if price.is_zero() {
                    self.env().revert(EngineError::PriceUnavailable);
                }
                price
            }
            None => U256::from(REFERENCE_PRICE),
        }
    }

    fn token_ref(&self) -> PegMintableContractRef {
        match self.token.get() {
            Some(token) => PegMintableContractRef::new(self.env(), token),
            None => self.env().revert(EngineError::InvalidConfig),
        }
    }
}

// ===== Helper Functions =====

/// Convert U512 to U256, or `None` if the value needs more than 256 bits
fn u512_to_u256(value: U512) -> Option<U256> {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|b| *b != 0) {
        return None;
    }
    Some(U256::from_little_endian(&bytes[..32]))
}

/// Convert U256 to U512
fn u256_to_u512(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}
