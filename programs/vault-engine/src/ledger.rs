//! Interfaces to the external balance ledgers
//!
//! The vault never stores balances itself. Custody of the asset and the share
//! supply live behind these traits; the vault only reads them and issues
//! transfers, mints and burns.

use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::math::U256;

/// Identity of an account on either ledger.
pub trait AccountKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> AccountKey for T {}

/// Failures reported by a ledger, surfaced to vault callers unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: U256, available: U256 },

    #[error("Balance overflow")]
    BalanceOverflow,

    #[error("Ledger rejected the operation: {0}")]
    Rejected(String),
}

/// Ledger of the underlying asset.
pub trait AssetLedger<K> {
    /// Identity of the underlying asset
    fn asset(&self) -> K;

    fn decimals(&self) -> u8;

    fn balance_of(&self, account: &K) -> U256;

    fn allowance(&self, owner: &K, spender: &K) -> U256;

    fn approve(&mut self, owner: &K, spender: &K, amount: U256) -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to` on behalf of `spender`.
    ///
    /// When `spender != from` the ledger must check and consume `from`'s
    /// allowance to `spender`.
    fn transfer_from(
        &mut self,
        spender: &K,
        from: &K,
        to: &K,
        amount: U256,
    ) -> Result<(), LedgerError>;
}

/// Ledger of the vault's share token. The vault is its only minter.
pub trait ShareLedger<K> {
    fn balance_of(&self, account: &K) -> U256;

    fn total_supply(&self) -> U256;

    fn allowance(&self, owner: &K, spender: &K) -> U256;

    fn approve(&mut self, owner: &K, spender: &K, amount: U256) -> Result<(), LedgerError>;

    fn mint(&mut self, to: &K, amount: U256) -> Result<(), LedgerError>;

    /// Burn `amount` of `owner`'s shares on behalf of `spender`, consuming
    /// allowance when `spender != owner`.
    fn burn(&mut self, spender: &K, owner: &K, amount: U256) -> Result<(), LedgerError>;
}
