//! Vault configuration

use crate::{
    constants::{DEFAULT_ASSET_OFFSET, ENV_ASSET_OFFSET, ENV_DECIMALS_OFFSET, MAX_DECIMALS},
    error::{Result, VaultError},
    math::{self, U256},
    state::VirtualOffset,
};

/// Creation-time parameters of a vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultConfig {
    /// Virtual share offset exponent; shares are priced against `10^decimals_offset` virtual shares
    pub decimals_offset: u8,

    /// Virtual assets added to the pool before each conversion
    pub asset_offset: U256,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            decimals_offset: 0,
            asset_offset: U256::from(DEFAULT_ASSET_OFFSET),
        }
    }
}

impl VaultConfig {
    /// Size the offset so shares always carry `MAX_DECIMALS` decimals
    pub fn for_asset_decimals(asset_decimals: u8) -> Result<Self> {
        if asset_decimals > MAX_DECIMALS {
            return Err(VaultError::InvalidAssetDecimals {
                decimals: asset_decimals,
                max: MAX_DECIMALS,
            });
        }

        Ok(Self {
            decimals_offset: MAX_DECIMALS - asset_decimals,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let decimals_offset = std::env::var(ENV_DECIMALS_OFFSET)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.decimals_offset);

        let asset_offset = std::env::var(ENV_ASSET_OFFSET)
            .ok()
            .and_then(|s| U256::from_dec_str(s.trim()).ok())
            .unwrap_or(defaults.asset_offset);

        Self {
            decimals_offset,
            asset_offset,
        }
    }

    pub fn virtual_offset(&self) -> Result<VirtualOffset> {
        VirtualOffset::new(self.asset_offset, math::pow10(self.decimals_offset)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_asset_decimals() {
        let config = VaultConfig::for_asset_decimals(6).unwrap();
        assert_eq!(config.decimals_offset, 12);
        assert_eq!(config.asset_offset, U256::one());

        assert_eq!(
            VaultConfig::for_asset_decimals(19),
            Err(VaultError::InvalidAssetDecimals {
                decimals: 19,
                max: MAX_DECIMALS
            })
        );
    }

    #[test]
    fn test_oversized_offset_rejected() {
        let config = VaultConfig {
            decimals_offset: 78,
            ..VaultConfig::default()
        };
        assert_eq!(config.virtual_offset(), Err(VaultError::ArithmeticOverflow));
    }
}
