/// Scenario parameters, in base units of a 6-decimal asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Decimal exponent of the vault's virtual share offset
    pub decimals_offset: u8,

    /// Assets the attacker sends straight to custody after seeding the vault
    pub donation: u128,

    /// Assets the victim (or honest depositor) puts in
    pub victim_deposit: u128,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            decimals_offset: 6,
            donation: 1_000_000_000,     // 1,000 units
            victim_deposit: 500_000_000, // 500 units
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let decimals_offset = std::env::var("SIM_DECIMALS_OFFSET")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.decimals_offset);

        let donation = std::env::var("SIM_DONATION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.donation);

        let victim_deposit = std::env::var("SIM_VICTIM_DEPOSIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.victim_deposit);

        Self {
            decimals_offset,
            donation,
            victim_deposit,
        }
    }
}
