use crate::{
    error::Result,
    events::EventSink,
    ledger::{AccountKey, AssetLedger, ShareLedger},
    math::U256,
    policy::LimitPolicy,
    state::TradeKind,
    vault::Vault,
};

use super::check_limit;

impl<K, A, S, P, E> Vault<K, A, S, P, E>
where
    K: AccountKey,
    A: AssetLedger<K>,
    S: ShareLedger<K>,
    P: LimitPolicy<K>,
    E: EventSink<K>,
{
    /// Mint exact `shares` to `receiver`, paying the required assets from `caller`.
    /// Returns assets paid (ceiling rounding - favors vault)
    pub fn mint(&mut self, caller: &K, shares: U256, receiver: &K) -> Result<U256> {
        let max = self.max_mint(receiver)?;
        check_limit(TradeKind::Mint, shares, max)?;

        let assets = self.preview_mint(shares)?;
        self.settle_deposit(caller, receiver, assets, shares)?;

        Ok(assets)
    }
}
