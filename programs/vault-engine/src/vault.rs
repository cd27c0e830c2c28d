use tracing::{debug, info};

use crate::{
    config::VaultConfig,
    error::{Result, VaultError},
    events::{EventSink, TracingSink},
    ledger::{AccountKey, AssetLedger, ShareLedger},
    math::{Rounding, U256},
    policy::{LimitPolicy, Unrestricted},
    state::{PoolSnapshot, VirtualOffset},
};

/// A single vault: owns its collaborators and prices every trade against
/// them.
///
/// `id` is the vault's custody account on the asset ledger and the spender
/// it uses when pulling assets from callers.
#[derive(Debug, Clone)]
pub struct Vault<K, A, S, P = Unrestricted, E = TracingSink> {
    pub(crate) id: K,
    pub(crate) decimals_offset: u8,
    pub(crate) offset: VirtualOffset,
    pub(crate) assets: A,
    pub(crate) shares: S,
    pub(crate) policy: P,
    pub(crate) events: E,
}

impl<K, A, S> Vault<K, A, S>
where
    K: AccountKey,
    A: AssetLedger<K>,
    S: ShareLedger<K>,
{
    pub fn new(id: K, config: &VaultConfig, assets: A, shares: S) -> Result<Self> {
        let offset = config.virtual_offset()?;

        info!(
            vault = ?id,
            asset = ?assets.asset(),
            decimals_offset = config.decimals_offset,
            asset_offset = %offset.assets(),
            share_offset = %offset.shares(),
            "Vault initialized"
        );

        Ok(Self {
            id,
            decimals_offset: config.decimals_offset,
            offset,
            assets,
            shares,
            policy: Unrestricted,
            events: TracingSink,
        })
    }
}

impl<K, A, S, P, E> Vault<K, A, S, P, E> {
    pub fn with_policy<Q>(self, policy: Q) -> Vault<K, A, S, Q, E> {
        Vault {
            id: self.id,
            decimals_offset: self.decimals_offset,
            offset: self.offset,
            assets: self.assets,
            shares: self.shares,
            policy,
            events: self.events,
        }
    }

    pub fn with_event_sink<F>(self, events: F) -> Vault<K, A, S, P, F> {
        Vault {
            id: self.id,
            decimals_offset: self.decimals_offset,
            offset: self.offset,
            assets: self.assets,
            shares: self.shares,
            policy: self.policy,
            events,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn offset(&self) -> &VirtualOffset {
        &self.offset
    }

    pub fn asset_ledger(&self) -> &A {
        &self.assets
    }

    /// Direct access to the asset ledger, e.g. for transfers that bypass the
    /// vault. Anything sent to the vault's account this way raises the share
    /// price for every holder.
    pub fn asset_ledger_mut(&mut self) -> &mut A {
        &mut self.assets
    }

    pub fn share_ledger(&self) -> &S {
        &self.shares
    }

    pub fn share_ledger_mut(&mut self) -> &mut S {
        &mut self.shares
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }
}

impl<K, A, S, P, E> Vault<K, A, S, P, E>
where
    K: AccountKey,
    A: AssetLedger<K>,
    S: ShareLedger<K>,
    P: LimitPolicy<K>,
    E: EventSink<K>,
{
    /// Identity of the underlying asset
    pub fn asset(&self) -> K {
        self.assets.asset()
    }

    /// Assets held in custody, including anything sent to the vault directly
    pub fn total_assets(&self) -> U256 {
        self.assets.balance_of(&self.id)
    }

    pub fn total_supply(&self) -> U256 {
        self.shares.total_supply()
    }

    /// Share decimals: asset decimals plus the virtual offset exponent
    pub fn decimals(&self) -> Result<u8> {
        self.assets
            .decimals()
            .checked_add(self.decimals_offset)
            .ok_or(VaultError::ArithmeticOverflow)
    }

    /// Current pool totals. Every preview, limit and trade prices against
    /// this one read path.
    pub fn pool(&self) -> PoolSnapshot {
        let pool = PoolSnapshot {
            total_assets: self.total_assets(),
            total_shares: self.total_supply(),
            offset: self.offset,
        };
        debug!(
            total_assets = %pool.total_assets,
            total_shares = %pool.total_shares,
            "Pool snapshot"
        );
        pool
    }

    /// Convert assets to shares using floor rounding
    pub fn convert_to_shares(&self, assets: U256) -> Result<U256> {
        self.pool().convert_to_shares(assets, Rounding::Down)
    }

    /// Convert shares to assets using floor rounding
    pub fn convert_to_assets(&self, shares: U256) -> Result<U256> {
        self.pool().convert_to_assets(shares, Rounding::Down)
    }
}
