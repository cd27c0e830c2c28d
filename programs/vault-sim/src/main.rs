//! Vault Simulator
//!
//! Drives an in-memory vault through an honest round trip and a
//! first-depositor inflation attack, logging the outcome of each.

mod config;
mod scenarios;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::SimConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vault_sim=info,vault_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env();
    info!(
        decimals_offset = config.decimals_offset,
        donation = config.donation,
        victim_deposit = config.victim_deposit,
        "Configuration loaded"
    );

    let round_trip = scenarios::round_trip(&config).context("round trip scenario failed")?;
    info!(
        shares = %round_trip.shares,
        lost_to_rounding = %round_trip.deposited.saturating_sub(round_trip.redeemed),
        "Honest depositor result"
    );

    let attack =
        scenarios::inflation_attack(&config).context("inflation attack scenario failed")?;
    if attack.victim_shares.is_zero() {
        warn!(
            victim_loss = %attack.victim_loss(),
            "Victim deposit rounded to zero shares, raise SIM_DECIMALS_OFFSET"
        );
    } else if !attack.attacker_profit().is_zero() {
        warn!(
            attacker_profit = %attack.attacker_profit(),
            victim_loss = %attack.victim_loss(),
            "Attack profitable at this offset"
        );
    } else {
        info!(
            victim_loss = %attack.victim_loss(),
            attacker_loss = %attack.attacker_spent.saturating_sub(attack.attacker_recovered),
            "Attack unprofitable at this offset"
        );
    }

    Ok(())
}
