//! Scenarios driven against a fresh in-memory vault.

use tracing::info;
use vault_engine::{
    AssetLedger, MemoryAssetLedger, MemoryShareLedger, Result, Vault, VaultConfig, U256,
};

use crate::config::SimConfig;

type Key = &'static str;
type SimVault = Vault<Key, MemoryAssetLedger<Key>, MemoryShareLedger<Key>>;

const VAULT: Key = "vault";
const ASSET: Key = "usdc";
const ASSET_DECIMALS: u8 = 6;
const DEPOSITOR: Key = "depositor";
const ATTACKER: Key = "attacker";
const VICTIM: Key = "victim";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripReport {
    pub deposited: U256,
    pub shares: U256,
    pub redeemed: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker_spent: U256,
    pub attacker_recovered: U256,
    pub victim_deposited: U256,
    pub victim_shares: U256,
    pub victim_recovered: U256,
}

impl AttackReport {
    /// Assets the attacker gained at the victim's expense, zero when the
    /// attack lost money.
    pub fn attacker_profit(&self) -> U256 {
        self.attacker_recovered.saturating_sub(self.attacker_spent)
    }

    pub fn victim_loss(&self) -> U256 {
        self.victim_deposited.saturating_sub(self.victim_recovered)
    }
}

/// Build a vault whose asset ledger funds each `(account, amount)` and
/// carries an unlimited approval for the vault.
fn build_vault(config: &SimConfig, funding: &[(Key, U256)]) -> Result<SimVault> {
    let mut assets = MemoryAssetLedger::new(ASSET, ASSET_DECIMALS);
    for (account, amount) in funding {
        assets.credit(account, *amount)?;
        assets.approve(account, &VAULT, U256::MAX)?;
    }

    let vault_config = VaultConfig {
        decimals_offset: config.decimals_offset,
        ..VaultConfig::default()
    };
    Vault::new(VAULT, &vault_config, assets, MemoryShareLedger::new())
}

/// A single depositor enters and leaves an otherwise empty vault.
pub fn round_trip(config: &SimConfig) -> Result<RoundTripReport> {
    let deposited = U256::from(config.victim_deposit);
    let mut vault = build_vault(config, &[(DEPOSITOR, deposited)])?;

    let shares = vault.deposit(&DEPOSITOR, deposited, &DEPOSITOR)?;
    let redeemed = vault.redeem(&DEPOSITOR, shares, &DEPOSITOR, &DEPOSITOR)?;

    info!(%deposited, %shares, %redeemed, "Round trip complete");

    Ok(RoundTripReport {
        deposited,
        shares,
        redeemed,
    })
}

/// First-depositor inflation attack: the attacker seeds the vault with one
/// base unit, donates to custody to inflate the share price, lets the victim
/// deposit, then both redeem everything.
pub fn inflation_attack(config: &SimConfig) -> Result<AttackReport> {
    let seed = U256::one();
    let donation = U256::from(config.donation);
    let victim_deposited = U256::from(config.victim_deposit);

    let mut vault = build_vault(
        config,
        &[(ATTACKER, seed + donation), (VICTIM, victim_deposited)],
    )?;

    let attacker_shares = vault.deposit(&ATTACKER, seed, &ATTACKER)?;
    vault
        .asset_ledger_mut()
        .transfer_from(&ATTACKER, &ATTACKER, &VAULT, donation)?;
    info!(
        %attacker_shares,
        total_assets = %vault.total_assets(),
        "Attacker inflated share price"
    );

    let victim_shares = vault.deposit(&VICTIM, victim_deposited, &VICTIM)?;
    let attacker_recovered = vault.redeem(&ATTACKER, attacker_shares, &ATTACKER, &ATTACKER)?;
    let victim_recovered = vault.redeem(&VICTIM, victim_shares, &VICTIM, &VICTIM)?;

    let report = AttackReport {
        attacker_spent: seed + donation,
        attacker_recovered,
        victim_deposited,
        victim_shares,
        victim_recovered,
    };

    info!(
        decimals_offset = config.decimals_offset,
        %victim_shares,
        victim_loss = %report.victim_loss(),
        attacker_profit = %report.attacker_profit(),
        stranded = %vault.total_assets(),
        "Inflation attack complete"
    );

    Ok(report)
}
