//! Vault records as shown on the dashboard.
//!
//! These mirror the on-chain vault layout; the contracts remain the source of
//! truth and nothing here enforces vault rules.

use serde::{Deserialize, Serialize};
use crate::vault::types::now_millis;

const DAY_MS: u64 = 86_400_000;
const HOUR_MS: u64 = 3_600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaultStatus {
    Active,
    Triggered,
    EmergencyTriggered,
    Distributed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockConditions {
    /// Blocks of inactivity before the vault can trigger.
    pub time_delay: u64,
    /// Blocks between required proof-of-life signals.
    pub proof_of_life_interval: u64,
    pub minimum_confirmations: u32,
    pub emergency_contacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: u64,
    pub owner: String,
    pub beneficiaries: Vec<String>,
    pub bitcoin_address: String,
    /// Microunits.
    pub total_amount: u64,
    /// ms since epoch.
    pub creation_time: u64,
    pub status: VaultStatus,
    pub distribution_percentages: Vec<u32>,
    pub unlock_conditions: UnlockConditions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<u64>,
}

/// Read-only set of vault records served to the dashboard.
#[derive(Debug, Default)]
pub struct VaultCatalog {
    vaults: Vec<Vault>,
}

impl VaultCatalog {
    pub fn new(vaults: Vec<Vault>) -> Self {
        Self { vaults }
    }

    /// The two sample vaults the dashboard ships with, dated relative to `now_ms`.
    pub fn demo(now_ms: u64) -> Self {
        let owner = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".to_string();
        let btc = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string();
        let conditions = UnlockConditions {
            time_delay: 4320,
            proof_of_life_interval: 1440,
            minimum_confirmations: 3,
            emergency_contacts: Vec::new(),
        };

        Self::new(vec![
            Vault {
                id: 1,
                owner: owner.clone(),
                beneficiaries: vec![
                    "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5".to_string(),
                    "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG".to_string(),
                ],
                bitcoin_address: btc.clone(),
                total_amount: 2_500_000,
                creation_time: now_ms.saturating_sub(5 * DAY_MS),
                status: VaultStatus::Active,
                distribution_percentages: vec![70, 30],
                unlock_conditions: conditions.clone(),
                confidence_score: Some(95),
                last_activity: Some(now_ms.saturating_sub(HOUR_MS)),
            },
            Vault {
                id: 2,
                owner,
                beneficiaries: vec!["ST3PF13W7Z0RRM42A8VZRVFQ75SV1K26RXEP8YGKJ".to_string()],
                bitcoin_address: btc,
                total_amount: 1_500_000,
                creation_time: now_ms.saturating_sub(30 * DAY_MS),
                status: VaultStatus::Triggered,
                distribution_percentages: vec![100],
                unlock_conditions: conditions,
                confidence_score: Some(15),
                last_activity: Some(now_ms.saturating_sub(10 * DAY_MS)),
            },
        ])
    }

    pub fn demo_now() -> Self {
        Self::demo(now_millis())
    }

    pub fn list(&self) -> Vec<Vault> {
        self.vaults.clone()
    }

    pub fn get(&self, id: u64) -> Option<Vault> {
        self.vaults.iter().find(|v| v.id == id).cloned()
    }
}

/// Aggregate figures for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Microunits across all vaults.
    pub total_value: u64,
    pub total_beneficiaries: usize,
    pub active_vaults: usize,
    /// Rounded mean confidence score; vaults without one count as 0.
    pub average_health: u32,
}

impl DashboardSummary {
    pub fn from_vaults(vaults: &[Vault]) -> Self {
        let total_value = vaults
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.total_amount));
        let total_beneficiaries = vaults.iter().map(|v| v.beneficiaries.len()).sum();
        let active_vaults = vaults
            .iter()
            .filter(|v| v.status == VaultStatus::Active)
            .count();

        let average_health = if vaults.is_empty() {
            0
        } else {
            let total: u32 = vaults
                .iter()
                .map(|v| u32::from(v.confidence_score.unwrap_or(0)))
                .sum();
            (f64::from(total) / vaults.len() as f64).round() as u32
        };

        Self {
            total_value,
            total_beneficiaries,
            active_vaults,
            average_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_summary() {
        let catalog = VaultCatalog::demo(100 * DAY_MS);
        let summary = DashboardSummary::from_vaults(&catalog.list());
        assert_eq!(summary.total_value, 4_000_000);
        assert_eq!(summary.total_beneficiaries, 3);
        assert_eq!(summary.active_vaults, 1);
        assert_eq!(summary.average_health, 55);
    }

    #[test]
    fn test_total_value_saturates() {
        let mut vaults = VaultCatalog::demo(100 * DAY_MS).list();
        vaults[0].total_amount = u64::MAX;
        let summary = DashboardSummary::from_vaults(&vaults);
        assert_eq!(summary.total_value, u64::MAX);
    }

    #[test]
    fn test_empty_summary() {
        let summary = DashboardSummary::from_vaults(&[]);
        assert_eq!(summary.average_health, 0);
        assert_eq!(summary.total_value, 0);
    }

    #[test]
    fn test_catalog_lookup_and_serde() {
        let catalog = VaultCatalog::demo(100 * DAY_MS);
        let vault = catalog.get(2).unwrap();
        assert_eq!(vault.status, VaultStatus::Triggered);
        assert_eq!(vault.creation_time, 70 * DAY_MS);
        assert!(catalog.get(9).is_none());

        let json = serde_json::to_value(&vault).unwrap();
        assert_eq!(json["status"], "triggered");
        assert_eq!(json["unlockConditions"]["timeDelay"], 4320);
        assert_eq!(
            serde_json::to_value(VaultStatus::EmergencyTriggered).unwrap(),
            "emergency-triggered"
        );
    }
}
