//! Vault Engine
//!
//! Proportional-claim vault accounting: participants deposit an asset into a
//! shared pool and receive shares that redeem for a proportional part of it.
//!
//! - [`math`]: 512-bit intermediate `mul_div` and the virtual-offset conversions
//! - [`Vault`]: deposit / mint / withdraw / redeem, their previews and limits
//! - [`ledger`]: traits for the external asset and share ledgers
//! - [`policy`]: pluggable deposit-side ceilings (pause, supply cap)
//! - [`memory`]: in-memory ledgers
//!
//! Every trade rounds in the vault's favor:
//!
//! | Operation | Caller specifies | Computed        | Rounding |
//! |-----------|------------------|-----------------|----------|
//! | Deposit   | assets           | shares minted   | Down     |
//! | Mint      | shares           | assets required | Up       |
//! | Withdraw  | assets           | shares burned   | Up       |
//! | Redeem    | shares           | assets returned | Down     |

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
mod instructions;
pub mod ledger;
pub mod math;
pub mod memory;
pub mod policy;
pub mod state;
mod vault;

pub use config::VaultConfig;
pub use error::{Result, VaultError};
pub use events::{EventSink, TracingSink, VaultEvent};
pub use ledger::{AccountKey, AssetLedger, LedgerError, ShareLedger};
pub use math::{mul_div, Rounding, U256};
pub use memory::{MemoryAssetLedger, MemoryShareLedger};
pub use policy::{Ceiling, LimitPolicy, PausePolicy, SupplyCapPolicy, Unrestricted};
pub use state::{PoolSnapshot, TradeKind, VirtualOffset};
pub use vault::Vault;
