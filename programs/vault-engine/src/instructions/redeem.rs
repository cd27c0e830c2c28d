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
    /// Redeem exact `shares` of `owner` and send the assets to `receiver`.
    /// Returns assets paid out (floor rounding - favors vault)
    pub fn redeem(&mut self, caller: &K, shares: U256, receiver: &K, owner: &K) -> Result<U256> {
        let max = self.max_redeem(owner);
        check_limit(TradeKind::Redeem, shares, max)?;

        let assets = self.preview_redeem(shares)?;
        self.settle_withdraw(caller, receiver, owner, assets, shares)?;

        Ok(assets)
    }
}
