//! Vault creation form as submitted by the dashboard.
//!
//! The contract call itself does not re-check these rules; they are enforced
//! here, at the edge, before a draft becomes [`CreateVaultParams`].

use serde::{Deserialize, Serialize};

use crate::vault::display::parse_stx_amount;
use crate::vault::types::{CreateVaultParams, DEFAULT_PROOF_OF_LIFE_BLOCKS, DEFAULT_TIME_DELAY_BLOCKS};

pub const MAX_BENEFICIARIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryShare {
    pub address: String,
    pub percentage: u32,
}

/// Unvalidated vault form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultDraft {
    pub bitcoin_address: String,
    /// Decimal STX amount as typed by the user, e.g. `"2.5"`.
    pub amount_stx: String,
    pub beneficiaries: Vec<BeneficiaryShare>,
    #[serde(default)]
    pub time_delay: Option<u64>,
    #[serde(default)]
    pub proof_of_life_interval: Option<u64>,
    #[serde(default)]
    pub emergency_contacts: Vec<String>,
}

impl VaultDraft {
    /// Check the draft and convert it. All problems are reported at once.
    pub fn validate(&self) -> Result<CreateVaultParams, Vec<String>> {
        let mut problems = Vec::new();

        if self.beneficiaries.is_empty() || self.beneficiaries.len() > MAX_BENEFICIARIES {
            problems.push(format!(
                "Between 1 and {} beneficiaries are allowed",
                MAX_BENEFICIARIES
            ));
        }

        let total: u64 = self.beneficiaries.iter().map(|b| u64::from(b.percentage)).sum();
        if total != 100 {
            problems.push("Percentages must add up to 100%".to_string());
        }

        if self.beneficiaries.iter().any(|b| b.address.trim().is_empty()) {
            problems.push("All beneficiary addresses are required".to_string());
        }

        if self.bitcoin_address.trim().is_empty() {
            problems.push("Bitcoin address is required".to_string());
        } else if !self.bitcoin_address.trim().is_ascii() {
            problems.push("Bitcoin address must be ASCII".to_string());
        }

        let amount = parse_stx_amount(&self.amount_stx).filter(|micro| *micro > 0);
        if amount.is_none() {
            problems.push("Valid amount is required".to_string());
        }

        match amount {
            Some(amount) if problems.is_empty() => Ok(CreateVaultParams {
                beneficiaries: self
                    .beneficiaries
                    .iter()
                    .map(|b| b.address.trim().to_string())
                    .collect(),
                bitcoin_address: self.bitcoin_address.trim().to_string(),
                amount,
                time_delay: self.time_delay.unwrap_or(DEFAULT_TIME_DELAY_BLOCKS),
                proof_of_life_interval: self
                    .proof_of_life_interval
                    .unwrap_or(DEFAULT_PROOF_OF_LIFE_BLOCKS),
                percentages: self.beneficiaries.iter().map(|b| b.percentage).collect(),
                emergency_contacts: self
                    .emergency_contacts
                    .iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect(),
            }),
            _ => Err(problems),
        }
    }
}
