//! Error types for the vault engine

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::math::U256;
use crate::state::TradeKind;

/// Vault error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("{kind} of {requested} exceeds the current limit of {max}")]
    LimitExceeded {
        kind: TradeKind,
        requested: U256,
        max: U256,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Receiver was credited {received} shares, expected at least {expected}")]
    ReceivedLessThanExpected { expected: U256, received: U256 },

    #[error("The vault cannot supply assets to itself")]
    VaultAsCaller,

    #[error("Virtual share offset must be greater than zero")]
    InvalidOffset,

    #[error("Asset decimals must be <= {max}, got {decimals}")]
    InvalidAssetDecimals { decimals: u8, max: u8 },

    #[error("Vault is already paused")]
    AlreadyPaused,

    #[error("Vault is not paused")]
    NotPaused,
}

/// Result type alias for vault operations
pub type Result<T> = std::result::Result<T, VaultError>;
