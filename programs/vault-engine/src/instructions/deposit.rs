use tracing::{error, info};

use crate::{
    error::{Result, VaultError},
    events::{EventSink, VaultEvent},
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
    /// Deposit exact `assets` from `caller` and mint shares to `receiver`.
    /// Returns shares minted (floor rounding - favors vault)
    pub fn deposit(&mut self, caller: &K, assets: U256, receiver: &K) -> Result<U256> {
        let max = self.max_deposit(receiver)?;
        check_limit(TradeKind::Deposit, assets, max)?;

        let shares = self.preview_deposit(assets)?;
        self.settle_deposit(caller, receiver, assets, shares)?;

        Ok(shares)
    }

    /// Pull `assets` from `caller` into custody, then mint `shares` to
    /// `receiver`. Either both happen or neither does.
    pub(crate) fn settle_deposit(
        &mut self,
        caller: &K,
        receiver: &K,
        assets: U256,
        shares: U256,
    ) -> Result<()> {
        // Pulling from custody into custody would mint against existing assets
        if *caller == self.id {
            return Err(VaultError::VaultAsCaller);
        }

        // Supply must absorb the new shares before any value moves
        self.shares
            .total_supply()
            .checked_add(shares)
            .ok_or(VaultError::ArithmeticOverflow)?;

        let allowance_before = self.assets.allowance(caller, &self.id);
        self.assets
            .transfer_from(&self.id, caller, &self.id, assets)?;

        let balance_before = self.shares.balance_of(receiver);
        if let Err(err) = self.shares.mint(receiver, shares) {
            self.refund_assets(caller, assets, allowance_before);
            return Err(err.into());
        }

        // A noncompliant share ledger may credit less than it reports
        let received = self
            .shares
            .balance_of(receiver)
            .saturating_sub(balance_before);
        if received < shares {
            self.unwind_mint(receiver, received);
            self.refund_assets(caller, assets, allowance_before);
            return Err(VaultError::ReceivedLessThanExpected {
                expected: shares,
                received,
            });
        }

        info!(
            vault = ?self.id,
            caller = ?caller,
            owner = ?receiver,
            %assets,
            %shares,
            "Deposit settled"
        );

        self.events.emit(VaultEvent::Deposit {
            vault: self.id.clone(),
            caller: caller.clone(),
            owner: receiver.clone(),
            assets,
            shares,
        });

        Ok(())
    }

    /// Return pulled assets to `caller` and reinstate the approval the pull
    /// consumed.
    fn refund_assets(&mut self, caller: &K, assets: U256, allowance: U256) {
        if let Err(err) = self.assets.transfer_from(&self.id, &self.id, caller, assets) {
            error!(vault = ?self.id, caller = ?caller, %assets, %err, "Asset refund failed");
        }
        if let Err(err) = self.assets.approve(caller, &self.id, allowance) {
            error!(vault = ?self.id, owner = ?caller, %err, "Asset allowance restore failed");
        }
    }

    fn unwind_mint(&mut self, receiver: &K, shares: U256) {
        if shares.is_zero() {
            return;
        }
        if let Err(err) = self.shares.burn(receiver, receiver, shares) {
            error!(vault = ?self.id, receiver = ?receiver, %shares, %err, "Share unwind failed");
        }
    }
}
