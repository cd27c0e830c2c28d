use tracing::{error, info};

use crate::{
    error::Result,
    events::{EventSink, VaultEvent},
    ledger::{AccountKey, AssetLedger, LedgerError, ShareLedger},
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
    /// Withdraw exact `assets` to `receiver` by burning `owner`'s shares.
    /// Returns shares burned (ceiling rounding - favors vault)
    pub fn withdraw(&mut self, caller: &K, assets: U256, receiver: &K, owner: &K) -> Result<U256> {
        let max = self.max_withdraw(owner)?;
        check_limit(TradeKind::Withdraw, assets, max)?;

        let shares = self.preview_withdraw(assets)?;
        self.settle_withdraw(caller, receiver, owner, assets, shares)?;

        Ok(shares)
    }

    /// Burn `shares` from `owner`, then pay `assets` out of custody to
    /// `receiver`. Either both happen or neither does.
    pub(crate) fn settle_withdraw(
        &mut self,
        caller: &K,
        receiver: &K,
        owner: &K,
        assets: U256,
        shares: U256,
    ) -> Result<()> {
        let custody = self.assets.balance_of(&self.id);
        if custody < assets {
            return Err(LedgerError::InsufficientBalance {
                required: assets,
                available: custody,
            }
            .into());
        }

        let allowance_before = (caller != owner).then(|| self.shares.allowance(owner, caller));
        self.shares.burn(caller, owner, shares)?;

        if let Err(err) = self
            .assets
            .transfer_from(&self.id, &self.id, receiver, assets)
        {
            self.restore_burn(caller, owner, shares, allowance_before);
            return Err(err.into());
        }

        info!(
            vault = ?self.id,
            caller = ?caller,
            receiver = ?receiver,
            owner = ?owner,
            %assets,
            %shares,
            "Withdraw settled"
        );

        self.events.emit(VaultEvent::Withdraw {
            vault: self.id.clone(),
            caller: caller.clone(),
            receiver: receiver.clone(),
            owner: owner.clone(),
            assets,
            shares,
        });

        Ok(())
    }

    fn restore_burn(&mut self, caller: &K, owner: &K, shares: U256, allowance: Option<U256>) {
        if let Err(err) = self.shares.mint(owner, shares) {
            error!(vault = ?self.id, owner = ?owner, %shares, %err, "Share restore failed");
        }
        if let Some(allowance) = allowance {
            if let Err(err) = self.shares.approve(owner, caller, allowance) {
                error!(vault = ?self.id, owner = ?owner, spender = ?caller, %err, "Allowance restore failed");
            }
        }
    }
}
