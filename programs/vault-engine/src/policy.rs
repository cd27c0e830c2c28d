//! Deposit-side trade ceilings
//!
//! The core places no intrinsic cap on deposits or mints. A [`LimitPolicy`]
//! plugged into the vault may introduce one; without it both limits are
//! unbounded.

use tracing::info;

use crate::{
    error::{Result, VaultError},
    math::{Rounding, U256},
    state::PoolSnapshot,
};

/// Ceiling returned by a policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ceiling {
    Unbounded,
    Limited(U256),
}

impl Ceiling {
    pub fn value(self) -> U256 {
        match self {
            Ceiling::Unbounded => U256::MAX,
            Ceiling::Limited(max) => max,
        }
    }
}

pub trait LimitPolicy<K> {
    /// Largest asset amount `receiver` may deposit right now
    fn deposit_ceiling(&self, _receiver: &K, _pool: &PoolSnapshot) -> Result<Ceiling> {
        Ok(Ceiling::Unbounded)
    }

    /// Largest share amount `receiver` may mint right now
    fn mint_ceiling(&self, _receiver: &K, _pool: &PoolSnapshot) -> Result<Ceiling> {
        Ok(Ceiling::Unbounded)
    }
}

/// No ceilings at all
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unrestricted;

impl<K> LimitPolicy<K> for Unrestricted {}

/// Emergency circuit breaker: while paused nothing can enter the vault.
/// Withdraw and redeem stay open so holders can always exit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PausePolicy {
    paused: bool,
}

impl PausePolicy {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) -> Result<()> {
        if self.paused {
            return Err(VaultError::AlreadyPaused);
        }
        self.paused = true;
        info!(paused = true, "Vault status changed");
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<()> {
        if !self.paused {
            return Err(VaultError::NotPaused);
        }
        self.paused = false;
        info!(paused = false, "Vault status changed");
        Ok(())
    }

    fn ceiling(&self) -> Ceiling {
        if self.paused {
            Ceiling::Limited(U256::zero())
        } else {
            Ceiling::Unbounded
        }
    }
}

impl<K> LimitPolicy<K> for PausePolicy {
    fn deposit_ceiling(&self, _receiver: &K, _pool: &PoolSnapshot) -> Result<Ceiling> {
        Ok(self.ceiling())
    }

    fn mint_ceiling(&self, _receiver: &K, _pool: &PoolSnapshot) -> Result<Ceiling> {
        Ok(self.ceiling())
    }
}

/// Caps the assets the vault may hold in total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyCapPolicy {
    pub max_total_assets: U256,
}

impl SupplyCapPolicy {
    pub fn new(max_total_assets: U256) -> Self {
        Self { max_total_assets }
    }

    fn headroom(&self, pool: &PoolSnapshot) -> U256 {
        self.max_total_assets.saturating_sub(pool.total_assets)
    }
}

impl<K> LimitPolicy<K> for SupplyCapPolicy {
    fn deposit_ceiling(&self, _receiver: &K, pool: &PoolSnapshot) -> Result<Ceiling> {
        Ok(Ceiling::Limited(self.headroom(pool)))
    }

    fn mint_ceiling(&self, _receiver: &K, pool: &PoolSnapshot) -> Result<Ceiling> {
        // Floor keeps the (ceiling-rounded) mint cost within the headroom
        let shares = pool.convert_to_shares(self.headroom(pool), Rounding::Down)?;
        Ok(Ceiling::Limited(shares))
    }
}
