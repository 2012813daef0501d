//! Session, transaction records and operation parameters.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Blocks per day on the settlement chain.
pub const BLOCKS_PER_DAY: u64 = 144;

/// Default inactivity delay before a vault can be triggered (90 days).
pub const DEFAULT_TIME_DELAY_BLOCKS: u64 = 90 * BLOCKS_PER_DAY;

/// Default proof-of-life check-in interval (30 days).
pub const DEFAULT_PROOF_OF_LIFE_BLOCKS: u64 = 30 * BLOCKS_PER_DAY;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// A connected wallet identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub address: String,
    /// When the session was established (ms since epoch).
    pub connected_at: u64,
}

/// Lifecycle status of a submitted call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Success,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Pending => "pending",
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
        }
    }
}

/// One entry of the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Empty unless the wallet assigned an id.
    pub tx_id: String,
    pub status: TxStatus,
    pub function_name: String,
    /// Call start time (ms since epoch).
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransactionRecord {
    pub(crate) fn pending(function_name: &str, timestamp: u64) -> Self {
        Self {
            tx_id: String::new(),
            status: TxStatus::Pending,
            function_name: function_name.to_string(),
            timestamp,
            error: None,
        }
    }

    pub(crate) fn succeed(self, tx_id: String) -> Self {
        Self {
            tx_id,
            status: TxStatus::Success,
            ..self
        }
    }

    pub(crate) fn fail(self, error: String) -> Self {
        Self {
            status: TxStatus::Failed,
            error: Some(error),
            ..self
        }
    }
}

/// Inputs for `create-vault`. Business rules (percentages summing to 100,
/// non-blank addresses) are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVaultParams {
    pub beneficiaries: Vec<String>,
    pub bitcoin_address: String,
    /// Amount in microunits.
    pub amount: u64,
    /// Inactivity delay in blocks.
    pub time_delay: u64,
    /// Proof-of-life interval in blocks.
    pub proof_of_life_interval: u64,
    pub percentages: Vec<u32>,
    #[serde(default)]
    pub emergency_contacts: Vec<String>,
}

impl CreateVaultParams {
    /// Parameters with the default delays and no emergency contacts.
    pub fn new(
        beneficiaries: Vec<String>,
        bitcoin_address: impl Into<String>,
        amount: u64,
        percentages: Vec<u32>,
    ) -> Self {
        Self {
            beneficiaries,
            bitcoin_address: bitcoin_address.into(),
            amount,
            time_delay: DEFAULT_TIME_DELAY_BLOCKS,
            proof_of_life_interval: DEFAULT_PROOF_OF_LIFE_BLOCKS,
            percentages,
            emergency_contacts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label_matches_wire_name() {
        for status in [TxStatus::Pending, TxStatus::Success, TxStatus::Failed] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.as_str());
        }
    }

    #[test]
    fn test_default_delays() {
        assert_eq!(DEFAULT_TIME_DELAY_BLOCKS, 12960);
        assert_eq!(DEFAULT_PROOF_OF_LIFE_BLOCKS, 4320);

        let params = CreateVaultParams::new(vec!["ST2".into()], "bc1q", 1, vec![100]);
        assert_eq!(params.time_delay, 12960);
        assert!(params.emergency_contacts.is_empty());
    }

    #[test]
    fn test_record_transitions() {
        let pending = TransactionRecord::pending("create-vault", 42);
        assert_eq!(pending.status, TxStatus::Pending);
        assert!(pending.tx_id.is_empty());

        let done = pending.clone().succeed("0xABC".into());
        assert_eq!(done.status, TxStatus::Success);
        assert_eq!(done.tx_id, "0xABC");
        assert_eq!(done.timestamp, 42);

        let failed = pending.fail("User denied".into());
        assert_eq!(failed.status, TxStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("User denied"));
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let record = TransactionRecord::pending("claim-inheritance", 1).succeed("0x1".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["txId"], "0x1");
        assert_eq!(json["functionName"], "claim-inheritance");
        assert_eq!(json["status"], "success");
        assert!(json.get("error").is_none());
    }
}
