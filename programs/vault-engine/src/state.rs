use std::fmt;

use crate::error::{Result, VaultError};
use crate::math::{self, Rounding, U256};

/// Virtual reserves added to both sides of the share price.
///
/// Fixed when the vault is created. The share side is `10^decimals_offset`
/// by convention and can never be zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VirtualOffset {
    assets: U256,
    shares: U256,
}

impl VirtualOffset {
    pub fn new(assets: U256, shares: U256) -> Result<Self> {
        if shares.is_zero() {
            return Err(VaultError::InvalidOffset);
        }
        Ok(Self { assets, shares })
    }

    /// `assets = 1`, `shares = 10^decimals_offset`
    pub fn from_decimals(decimals_offset: u8) -> Result<Self> {
        Self::new(U256::one(), math::pow10(decimals_offset)?)
    }

    pub fn assets(&self) -> U256 {
        self.assets
    }

    pub fn shares(&self) -> U256 {
        self.shares
    }
}

/// Pool totals read from the ledgers at a single point in time.
///
/// Previews and trades both price against a snapshot taken through
/// [`crate::Vault::pool`], so a preview matches execution whenever no other
/// operation lands in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub total_assets: U256,
    pub total_shares: U256,
    pub offset: VirtualOffset,
}

impl PoolSnapshot {
    pub fn convert_to_shares(&self, assets: U256, rounding: Rounding) -> Result<U256> {
        math::convert_to_shares(
            assets,
            self.total_assets,
            self.total_shares,
            &self.offset,
            rounding,
        )
    }

    pub fn convert_to_assets(&self, shares: U256, rounding: Rounding) -> Result<U256> {
        math::convert_to_assets(
            shares,
            self.total_assets,
            self.total_shares,
            &self.offset,
            rounding,
        )
    }
}

/// The four trade operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TradeKind {
    Deposit,
    Mint,
    Withdraw,
    Redeem,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TradeKind::Deposit => "Deposit",
            TradeKind::Mint => "Mint",
            TradeKind::Withdraw => "Withdraw",
            TradeKind::Redeem => "Redeem",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_share_offset_rejected() {
        assert_eq!(
            VirtualOffset::new(U256::one(), U256::zero()),
            Err(VaultError::InvalidOffset)
        );
        // A zero asset offset is allowed; genesis conversions then divide by zero
        let offset = VirtualOffset::new(U256::zero(), U256::one()).unwrap();
        let pool = PoolSnapshot {
            total_assets: U256::zero(),
            total_shares: U256::zero(),
            offset,
        };
        assert_eq!(
            pool.convert_to_shares(U256::from(10u64), Rounding::Down),
            Err(VaultError::DivisionByZero)
        );
    }

    #[test]
    fn test_from_decimals() {
        let offset = VirtualOffset::from_decimals(6).unwrap();
        assert_eq!(offset.assets(), U256::one());
        assert_eq!(offset.shares(), U256::from(1_000_000u64));
    }
}
