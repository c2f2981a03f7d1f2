//! Protocol error definitions.

use odra::prelude::*;

/// Collateral engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Validation errors (1xx)
    InvalidAmount = 100,
    AssetNotAllowed = 101,
    MismatchedAssetsAndFeeds = 102,

    // Invariant errors (2xx)
    HealthFactorBelowMinimum = 200,
    HealthFactorNotImproved = 201,

    // Liquidation precondition errors (3xx)
    HealthFactorOk = 300,
    DebtCoverTooSmall = 301,

    // Collaborator failures (4xx)
    TransferFailed = 400,
    MintFailed = 401,

    // Data-trust errors (5xx)
    StalePrice = 500,
    InvalidPrice = 501,

    // Underflow errors (6xx)
    InsufficientCollateral = 600,
    BurnExceedsDebt = 601,

    // Token errors (7xx)
    Unauthorized = 700,
    InsufficientTokenBalance = 701,
    InsufficientAllowance = 702,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Validation
            EngineError::InvalidAmount => "Amount must be greater than zero",
            EngineError::AssetNotAllowed => "Asset is not an accepted reserve asset",
            EngineError::MismatchedAssetsAndFeeds => {
                "Asset and price feed lists must have the same length"
            }

            // Invariant
            EngineError::HealthFactorBelowMinimum => "Health factor below minimum",
            EngineError::HealthFactorNotImproved => "Liquidation did not improve health factor",

            // Liquidation precondition
            EngineError::HealthFactorOk => "Target account is not liquidatable",
            EngineError::DebtCoverTooSmall => "Debt to cover converts to zero collateral",

            // Collaborator
            EngineError::TransferFailed => "Token transfer failed",
            EngineError::MintFailed => "Synthetic token mint failed",

            // Data trust
            EngineError::StalePrice => "Price observation is stale",
            EngineError::InvalidPrice => "Price observation is not positive",

            // Underflow
            EngineError::InsufficientCollateral => "Insufficient collateral position",
            EngineError::BurnExceedsDebt => "Burn amount exceeds outstanding debt",

            // Token
            EngineError::Unauthorized => "Unauthorized: caller lacks this capability",
            EngineError::InsufficientTokenBalance => "Insufficient token balance",
            EngineError::InsufficientAllowance => "Insufficient token allowance",
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
