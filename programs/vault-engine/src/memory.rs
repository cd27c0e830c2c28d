//! In-memory ledgers
//!
//! HashMap-backed implementations of [`AssetLedger`] and [`ShareLedger`] with
//! ERC-20 style allowances. Every operation validates before it writes, so a
//! failed call leaves the ledger untouched.

use std::collections::HashMap;

use crate::{
    ledger::{AccountKey, AssetLedger, LedgerError, ShareLedger},
    math::U256,
};

#[derive(Debug, Clone)]
struct Book<K> {
    balances: HashMap<K, U256>,
    allowances: HashMap<(K, K), U256>,
}

impl<K> Default for Book<K> {
    fn default() -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }
}

impl<K: AccountKey> Book<K> {
    fn balance(&self, account: &K) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &K, spender: &K) -> U256 {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: &K, spender: &K, amount: U256) {
        self.allowances
            .insert((owner.clone(), spender.clone()), amount);
    }

    /// Allowance left after `spender` uses `amount` of `owner`'s funds, or
    /// `None` when no allowance is involved.
    fn remaining_allowance(
        &self,
        spender: &K,
        owner: &K,
        amount: U256,
    ) -> Result<Option<U256>, LedgerError> {
        if spender == owner {
            return Ok(None);
        }

        let available = self.allowance(owner, spender);
        // MAX is an infinite approval
        if available == U256::MAX {
            return Ok(Some(available));
        }

        available
            .checked_sub(amount)
            .map(Some)
            .ok_or(LedgerError::InsufficientAllowance {
                required: amount,
                available,
            })
    }

    fn debit_amount(&self, account: &K, amount: U256) -> Result<U256, LedgerError> {
        let available = self.balance(account);
        available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                required: amount,
                available,
            })
    }
}

/// In-memory ledger of the underlying asset
#[derive(Debug, Clone)]
pub struct MemoryAssetLedger<K> {
    asset: K,
    decimals: u8,
    book: Book<K>,
}

impl<K: AccountKey> MemoryAssetLedger<K> {
    pub fn new(asset: K, decimals: u8) -> Self {
        Self {
            asset,
            decimals,
            book: Book::default(),
        }
    }

    /// Issue new asset units to `account`
    pub fn credit(&mut self, account: &K, amount: U256) -> Result<(), LedgerError> {
        let balance = self
            .book
            .balance(account)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.book.balances.insert(account.clone(), balance);
        Ok(())
    }
}

impl<K: AccountKey> AssetLedger<K> for MemoryAssetLedger<K> {
    fn asset(&self) -> K {
        self.asset.clone()
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn balance_of(&self, account: &K) -> U256 {
        self.book.balance(account)
    }

    fn allowance(&self, owner: &K, spender: &K) -> U256 {
        self.book.allowance(owner, spender)
    }

    fn approve(&mut self, owner: &K, spender: &K, amount: U256) -> Result<(), LedgerError> {
        self.book.set_allowance(owner, spender, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: &K,
        from: &K,
        to: &K,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let allowance = self.book.remaining_allowance(spender, from, amount)?;
        let from_balance = self.book.debit_amount(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .book
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        if let Some(remaining) = allowance {
            self.book.set_allowance(from, spender, remaining);
        }
        self.book.balances.insert(from.clone(), from_balance);
        self.book.balances.insert(to.clone(), to_balance);
        Ok(())
    }
}

/// In-memory ledger of the vault's share token
#[derive(Debug, Clone)]
pub struct MemoryShareLedger<K> {
    book: Book<K>,
    total_supply: U256,
}

impl<K> Default for MemoryShareLedger<K> {
    fn default() -> Self {
        Self {
            book: Book::default(),
            total_supply: U256::zero(),
        }
    }
}

impl<K: AccountKey> MemoryShareLedger<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain holder-to-holder share transfer
    pub fn transfer(&mut self, from: &K, to: &K, amount: U256) -> Result<(), LedgerError> {
        let from_balance = self.book.debit_amount(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .book
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.book.balances.insert(from.clone(), from_balance);
        self.book.balances.insert(to.clone(), to_balance);
        Ok(())
    }
}

impl<K: AccountKey> ShareLedger<K> for MemoryShareLedger<K> {
    fn balance_of(&self, account: &K) -> U256 {
        self.book.balance(account)
    }

    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn allowance(&self, owner: &K, spender: &K) -> U256 {
        self.book.allowance(owner, spender)
    }

    fn approve(&mut self, owner: &K, spender: &K, amount: U256) -> Result<(), LedgerError> {
        self.book.set_allowance(owner, spender, amount);
        Ok(())
    }

    fn mint(&mut self, to: &K, amount: U256) -> Result<(), LedgerError> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        // Bounded by total supply, cannot overflow once the supply check passed
        let balance = self.book.balance(to) + amount;

        self.total_supply = total_supply;
        self.book.balances.insert(to.clone(), balance);
        Ok(())
    }

    fn burn(&mut self, spender: &K, owner: &K, amount: U256) -> Result<(), LedgerError> {
        let allowance = self.book.remaining_allowance(spender, owner, amount)?;
        let balance = self.book.debit_amount(owner, amount)?;

        if let Some(remaining) = allowance {
            self.book.set_allowance(owner, spender, remaining);
        }
        self.book.balances.insert(owner.clone(), balance);
        self.total_supply -= amount;
        Ok(())
    }
}
