#![allow(dead_code)]

use vault_engine::{
    AssetLedger, LedgerError, MemoryAssetLedger, MemoryShareLedger, ShareLedger, Unrestricted,
    Vault, VaultConfig, VaultEvent, U256,
};

pub type Key = &'static str;

pub const VAULT: Key = "vault";
pub const ASSET: Key = "usdc";
pub const ALICE: Key = "alice";
pub const BOB: Key = "bob";
pub const CAROL: Key = "carol";

pub type TestVault<S = MemoryShareLedger<Key>, P = Unrestricted> =
    Vault<Key, MemoryAssetLedger<Key>, S, P, Vec<VaultEvent<Key>>>;

pub fn u(value: u128) -> U256 {
    U256::from(value)
}

/// Asset ledger where each account holds `funding` and has approved the vault
pub fn funded_assets(accounts: &[Key], funding: U256) -> MemoryAssetLedger<Key> {
    let mut assets = MemoryAssetLedger::new(ASSET, 6);
    for account in accounts {
        assets.credit(account, funding).unwrap();
        assets.approve(account, &VAULT, U256::MAX).unwrap();
    }
    assets
}

pub fn vault_with_shares<S: ShareLedger<Key>>(decimals_offset: u8, shares: S) -> TestVault<S> {
    let config = VaultConfig {
        decimals_offset,
        ..VaultConfig::default()
    };
    Vault::new(
        VAULT,
        &config,
        funded_assets(&[ALICE, BOB, CAROL], u(1_000_000_000_000)),
        shares,
    )
    .unwrap()
    .with_event_sink(Vec::new())
}

pub fn vault(decimals_offset: u8) -> TestVault {
    vault_with_shares(decimals_offset, MemoryShareLedger::new())
}

/// Send assets straight to the vault's custody account, bypassing deposit
pub fn donate<S, P>(vault: &mut TestVault<S, P>, from: Key, amount: U256) {
    vault
        .asset_ledger_mut()
        .transfer_from(&from, &from, &VAULT, amount)
        .unwrap();
}

/// Share ledger that credits one share less than it is asked to mint
#[derive(Debug, Default)]
pub struct ShortMintLedger {
    pub inner: MemoryShareLedger<Key>,
}

impl ShareLedger<Key> for ShortMintLedger {
    fn balance_of(&self, account: &Key) -> U256 {
        self.inner.balance_of(account)
    }

    fn total_supply(&self) -> U256 {
        self.inner.total_supply()
    }

    fn allowance(&self, owner: &Key, spender: &Key) -> U256 {
        self.inner.allowance(owner, spender)
    }

    fn approve(&mut self, owner: &Key, spender: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.approve(owner, spender, amount)
    }

    fn mint(&mut self, to: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.mint(to, amount.saturating_sub(U256::one()))
    }

    fn burn(&mut self, spender: &Key, owner: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.burn(spender, owner, amount)
    }
}

/// Share ledger whose mint always fails
#[derive(Debug, Default)]
pub struct FrozenMintLedger {
    pub inner: MemoryShareLedger<Key>,
}

impl ShareLedger<Key> for FrozenMintLedger {
    fn balance_of(&self, account: &Key) -> U256 {
        self.inner.balance_of(account)
    }

    fn total_supply(&self) -> U256 {
        self.inner.total_supply()
    }

    fn allowance(&self, owner: &Key, spender: &Key) -> U256 {
        self.inner.allowance(owner, spender)
    }

    fn approve(&mut self, owner: &Key, spender: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.approve(owner, spender, amount)
    }

    fn mint(&mut self, _to: &Key, _amount: U256) -> Result<(), LedgerError> {
        Err(LedgerError::Rejected("minting frozen".to_string()))
    }

    fn burn(&mut self, spender: &Key, owner: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.burn(spender, owner, amount)
    }
}

/// Asset ledger that refuses to release anything from the vault's custody
#[derive(Debug)]
pub struct LockedCustodyLedger {
    pub inner: MemoryAssetLedger<Key>,
}

impl AssetLedger<Key> for LockedCustodyLedger {
    fn asset(&self) -> Key {
        self.inner.asset()
    }

    fn decimals(&self) -> u8 {
        self.inner.decimals()
    }

    fn balance_of(&self, account: &Key) -> U256 {
        self.inner.balance_of(account)
    }

    fn allowance(&self, owner: &Key, spender: &Key) -> U256 {
        self.inner.allowance(owner, spender)
    }

    fn approve(&mut self, owner: &Key, spender: &Key, amount: U256) -> Result<(), LedgerError> {
        self.inner.approve(owner, spender, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Key,
        from: &Key,
        to: &Key,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if *from == VAULT {
            return Err(LedgerError::Rejected("custody locked".to_string()));
        }
        self.inner.transfer_from(spender, from, to, amount)
    }
}
