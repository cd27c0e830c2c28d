/// Decimals of the share token when the vault is sized from the asset's decimals.
pub const MAX_DECIMALS: u8 = 18;

/// Virtual assets added to `total_assets` before every conversion.
pub const DEFAULT_ASSET_OFFSET: u64 = 1;

pub const ENV_DECIMALS_OFFSET: &str = "VAULT_DECIMALS_OFFSET";
pub const ENV_ASSET_OFFSET: &str = "VAULT_ASSET_OFFSET";
