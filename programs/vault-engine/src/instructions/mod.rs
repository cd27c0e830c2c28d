//! Trade operations, previews and limits, one file per operation.

mod deposit;
mod mint;
mod redeem;
mod view;
mod withdraw;

use tracing::warn;

use crate::{
    error::{Result, VaultError},
    math::U256,
    state::TradeKind,
};

fn check_limit(kind: TradeKind, requested: U256, max: U256) -> Result<()> {
    if requested > max {
        warn!(%kind, %requested, %max, "Trade exceeds limit");
        return Err(VaultError::LimitExceeded {
            kind,
            requested,
            max,
        });
    }
    Ok(())
}
