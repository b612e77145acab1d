//! Engine error definitions.

use odra::prelude::*;

/// Collateral engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Amount / collateral validation (1xx)
    InvalidAmount = 100,
    IncorrectCollateralAmount = 101,
    InsufficientCollateral = 102,
    NotEnoughCollateral = 103,

    // Solvency (2xx)
    HealthFactorBroken = 200,

    // Arithmetic (3xx)
    Underflow = 300,
    Overflow = 301,

    // External collaborators (4xx)
    MintingFailed = 400,
    TransferFailed = 401,
    InsufficientTokenBalance = 402,

    // Access control / configuration (5xx)
    Unauthorized = 500,
    InvalidConfig = 501,

    // Price source (6xx)
    PriceUnavailable = 600,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            EngineError::InvalidAmount => "Amount must be greater than zero",
            EngineError::IncorrectCollateralAmount => "Attached value does not cover declared collateral",
            EngineError::InsufficientCollateral => "Insufficient collateral to mint",
            EngineError::NotEnoughCollateral => "Not enough collateral to redeem",

            EngineError::HealthFactorBroken => "Health factor below minimum",

            EngineError::Underflow => "Ledger balance would underflow",
            EngineError::Overflow => "Arithmetic overflow",

            EngineError::MintingFailed => "Derivative token mint failed",
            EngineError::TransferFailed => "Collateral transfer failed",
            EngineError::InsufficientTokenBalance => "Insufficient token balance",

            EngineError::Unauthorized => "Unauthorized caller",
            EngineError::InvalidConfig => "Invalid configuration parameter",

            EngineError::PriceUnavailable => "Price source returned no price",
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EngineError> for OdraError {
    fn from(error: EngineError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
