use crate::{
    error::Result,
    events::EventSink,
    ledger::{AccountKey, AssetLedger, ShareLedger},
    math::{Rounding, U256},
    policy::LimitPolicy,
    vault::Vault,
};

impl<K, A, S, P, E> Vault<K, A, S, P, E>
where
    K: AccountKey,
    A: AssetLedger<K>,
    S: ShareLedger<K>,
    P: LimitPolicy<K>,
    E: EventSink<K>,
{
    /// Preview how many shares would be minted for given assets (floor rounding)
    pub fn preview_deposit(&self, assets: U256) -> Result<U256> {
        self.pool().convert_to_shares(assets, Rounding::Down)
    }

    /// Preview how many assets are required to mint exact shares (ceiling rounding)
    pub fn preview_mint(&self, shares: U256) -> Result<U256> {
        self.pool().convert_to_assets(shares, Rounding::Up)
    }

    /// Preview how many shares must be burned to withdraw exact assets (ceiling rounding)
    pub fn preview_withdraw(&self, assets: U256) -> Result<U256> {
        self.pool().convert_to_shares(assets, Rounding::Up)
    }

    /// Preview how many assets would be received for redeeming shares (floor rounding)
    pub fn preview_redeem(&self, shares: U256) -> Result<U256> {
        self.pool().convert_to_assets(shares, Rounding::Down)
    }

    /// Maximum assets that can be deposited for `receiver` (unbounded unless the policy caps it)
    pub fn max_deposit(&self, receiver: &K) -> Result<U256> {
        let ceiling = self.policy.deposit_ceiling(receiver, &self.pool())?;
        Ok(ceiling.value())
    }

    /// Maximum shares that can be minted for `receiver` (unbounded unless the policy caps it)
    pub fn max_mint(&self, receiver: &K) -> Result<U256> {
        let ceiling = self.policy.mint_ceiling(receiver, &self.pool())?;
        Ok(ceiling.value())
    }

    /// Maximum assets that owner can withdraw (limited by their shares)
    pub fn max_withdraw(&self, owner: &K) -> Result<U256> {
        let owner_shares = self.shares.balance_of(owner);
        self.pool().convert_to_assets(owner_shares, Rounding::Down)
    }

    /// Maximum shares that owner can redeem (their share balance)
    pub fn max_redeem(&self, owner: &K) -> U256 {
        self.shares.balance_of(owner)
    }
}
