//! Domain operations: argument shaping around [`VaultController::submit`].
//!
//! Each operation resolves its target contract first and fails with
//! `ContractNotConfigured` before anything else happens.

use crate::blockchain::clarity::ClarityValue;
use crate::blockchain::types::ContractRole;
use crate::vault::controller::VaultController;
use crate::vault::error::{VaultError, VaultResult};
use crate::vault::types::CreateVaultParams;

pub const CREATE_VAULT: &str = "create-vault";
pub const CLAIM_INHERITANCE: &str = "claim-inheritance";
pub const SIMULATE_ACTIVITY_BURST: &str = "simulate-activity-burst";
pub const SIMULATE_DEATH: &str = "simulate-death";

/// Ordered `create-vault` arguments.
pub fn create_vault_args(params: &CreateVaultParams) -> Vec<ClarityValue> {
    vec![
        ClarityValue::list(params.beneficiaries.iter().map(ClarityValue::principal)),
        ClarityValue::string_ascii(params.bitcoin_address.as_str()),
        ClarityValue::uint(params.amount),
        ClarityValue::uint(params.time_delay),
        ClarityValue::uint(params.proof_of_life_interval),
        ClarityValue::list(params.percentages.iter().map(|p| ClarityValue::uint(*p))),
        ClarityValue::list(params.emergency_contacts.iter().map(ClarityValue::principal)),
    ]
}

impl VaultController {
    /// Create an inheritance vault on the vault manager contract.
    pub async fn create_vault(&self, params: CreateVaultParams) -> VaultResult<String> {
        let contract = self.target(ContractRole::VaultManager)?;

        tracing::info!(
            beneficiaries = params.beneficiaries.len(),
            amount = params.amount,
            time_delay = params.time_delay,
            proof_of_life_interval = params.proof_of_life_interval,
            "Creating vault"
        );

        self.submit(&contract, CREATE_VAULT, create_vault_args(&params)).await
    }

    /// Claim a triggered vault's payout as a beneficiary.
    pub async fn claim_inheritance(&self, vault_id: u64) -> VaultResult<String> {
        let contract = self.target(ContractRole::VaultManager)?;
        self.submit(&contract, CLAIM_INHERITANCE, vec![ClarityValue::uint(vault_id)])
            .await
    }

    /// Report owner activity for a vault through the oracle integration.
    pub async fn trigger_activity(&self, vault_id: u64) -> VaultResult<String> {
        let contract = self.target(ContractRole::OracleIntegration)?;
        self.submit(&contract, SIMULATE_ACTIVITY_BURST, vec![ClarityValue::uint(vault_id)])
            .await
    }

    /// Report the owner's death to the time-lock controller.
    pub async fn trigger_death(&self, vault_id: u64) -> VaultResult<String> {
        let contract = self.target(ContractRole::TimeLockController)?;
        self.submit(&contract, SIMULATE_DEATH, vec![ClarityValue::uint(vault_id)])
            .await
    }

    fn target(&self, role: ContractRole) -> VaultResult<String> {
        match self.contracts().get(role) {
            Some(id) => Ok(id.to_string()),
            None => Err(self.fail(VaultError::ContractNotConfigured(role))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::types::DEFAULT_PROOF_OF_LIFE_BLOCKS;

    #[test]
    fn test_create_vault_argument_order() {
        let mut params = CreateVaultParams::new(
            vec!["ST2A".into(), "ST3B".into()],
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            2_500_000,
            vec![70, 30],
        );
        params.emergency_contacts = vec!["ST4C".into()];

        let args = create_vault_args(&params);
        assert_eq!(args.len(), 7);
        assert_eq!(
            args[0],
            ClarityValue::List(vec![
                ClarityValue::Principal("ST2A".into()),
                ClarityValue::Principal("ST3B".into()),
            ])
        );
        assert_eq!(
            args[1],
            ClarityValue::StringAscii("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".into())
        );
        assert_eq!(args[2], ClarityValue::Uint(2_500_000));
        assert_eq!(args[3], ClarityValue::Uint(12960));
        assert_eq!(args[4], ClarityValue::Uint(DEFAULT_PROOF_OF_LIFE_BLOCKS as u128));
        assert_eq!(
            args[5],
            ClarityValue::List(vec![ClarityValue::Uint(70), ClarityValue::Uint(30)])
        );
        assert_eq!(
            args[6],
            ClarityValue::List(vec![ClarityValue::Principal("ST4C".into())])
        );
    }

    #[test]
    fn test_empty_emergency_contacts_still_sent() {
        let params = CreateVaultParams::new(vec!["ST2A".into()], "bc1q", 1, vec![100]);
        let args = create_vault_args(&params);
        assert_eq!(args[6], ClarityValue::List(vec![]));
    }
}
