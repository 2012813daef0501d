//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::blockchain::types::ContractRole;
use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const VAULT_MANAGER_ENV: &str = "VAULT_MANAGER_CONTRACT";
pub const TIME_LOCK_CONTROLLER_ENV: &str = "TIME_LOCK_CONTROLLER_CONTRACT";
pub const ORACLE_INTEGRATION_ENV: &str = "ORACLE_INTEGRATION_CONTRACT";
pub const NETWORK_ENV: &str = "VAULT_NETWORK";
pub const BRIDGE_URL_ENV: &str = "WALLET_BRIDGE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(e) => write!(f, "Environment error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load, override from the environment, and validate a TOML config file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    finish(config)
}

/// Defaults plus environment overrides, validated.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    finish(AppConfig::default())
}

fn finish(mut config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply overrides looked up through `lookup`. Empty values are ignored.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    for (key, role) in [
        (VAULT_MANAGER_ENV, ContractRole::VaultManager),
        (TIME_LOCK_CONTROLLER_ENV, ContractRole::TimeLockController),
        (ORACLE_INTEGRATION_ENV, ContractRole::OracleIntegration),
    ] {
        if let Some(value) = lookup(key) {
            config.contracts.set(role, value.trim());
        }
    }

    if let Some(value) = lookup(NETWORK_ENV) {
        config.network = value.parse().map_err(ConfigError::Env)?;
    }

    if let Some(value) = lookup(BRIDGE_URL_ENV) {
        config.wallet.bridge_url = value;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::Network;
    use std::collections::HashMap;

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (VAULT_MANAGER_ENV, "SP1.vault-manager"),
            (ORACLE_INTEGRATION_ENV, "  "),
            (NETWORK_ENV, "mainnet"),
        ]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, |k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.contracts.get(ContractRole::VaultManager), Some("SP1.vault-manager"));
        assert_eq!(config.contracts.get(ContractRole::OracleIntegration), None);
        assert_eq!(config.network, Network::Mainnet);
    }

    #[test]
    fn test_bad_network_override() {
        let mut config = AppConfig::default();
        let result = apply_overrides(&mut config, |k| {
            (k == NETWORK_ENV).then(|| "regtest".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn test_sample_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/vault.toml");
        let content = fs::read_to_string(path).unwrap();
        let config: AppConfig = toml::from_str(&content).unwrap();

        assert!(validate_config(&config).is_ok());
        assert_eq!(config.wallet.mode, crate::config::schema::WalletMode::Mock);
        for role in ContractRole::ALL {
            assert!(config.contracts.get(role).is_some());
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroTimeout,
            ValidationError::BindAddress("x".into()),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Validation failed: "));
        assert!(text.contains(", "));
    }
}
