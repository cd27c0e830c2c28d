//! # Vault Events
//!
//! Notification records emitted after every completed trade. Events are
//! handed to an [`EventSink`] only once all ledger mutations of the trade
//! have been applied.
//!
//! ## Format
//!
//! The default [`TracingSink`] logs each event as a JSON line prefixed with
//! `EVENT_JSON:`. Amounts are decimal strings:
//! ```json
//! {"event":"deposit","vault":"vault","caller":"alice","owner":"alice","assets":"1000","shares":"1000000"}
//! ```

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::math::U256;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VaultEvent<K> {
    /// Assets entered the vault and shares were minted to `owner`.
    Deposit {
        vault: K,
        caller: K,
        owner: K,
        #[serde(serialize_with = "as_decimal")]
        assets: U256,
        #[serde(serialize_with = "as_decimal")]
        shares: U256,
    },
    /// Shares of `owner` were burned and assets sent to `receiver`.
    Withdraw {
        vault: K,
        caller: K,
        receiver: K,
        owner: K,
        #[serde(serialize_with = "as_decimal")]
        assets: U256,
        #[serde(serialize_with = "as_decimal")]
        shares: U256,
    },
}

fn as_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Observer of vault events.
pub trait EventSink<K> {
    fn emit(&mut self, event: VaultEvent<K>);
}

/// Logs events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl<K: Serialize> EventSink<K> for TracingSink {
    fn emit(&mut self, event: VaultEvent<K>) {
        match serde_json::to_string(&event) {
            Ok(json) => info!(target: "vault_engine::events", "EVENT_JSON:{json}"),
            Err(err) => warn!(%err, "Failed to serialize vault event"),
        }
    }
}

/// Collects events in order, for callers that inspect them afterwards.
impl<K> EventSink<K> for Vec<VaultEvent<K>> {
    fn emit(&mut self, event: VaultEvent<K>) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_format() {
        let event = VaultEvent::Deposit {
            vault: "vault",
            caller: "alice",
            owner: "bob",
            assets: U256::from(1_000u64),
            shares: U256::MAX,
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "deposit");
        assert_eq!(json["owner"], "bob");
        assert_eq!(json["assets"], "1000");
        assert_eq!(
            json["shares"],
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }
}
