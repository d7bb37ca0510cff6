//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TICKETS_MAX_PER_PURCHASE=25                                        │
//! │     TICKETS_ADULT_PRICE=20                                             │
//! │     TICKETS_FAIL_PAYMENT="card declined"                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else                                              │
//! │     ~/.config/tickets/tickets.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     PurchasePolicy::default(), no simulated failures                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [policy]
//! max_tickets_per_purchase = 25
//! adult_price = 20
//! child_price = 10
//! infant_price = 0
//!
//! [simulation]
//! fail_payment = "card declined"    # omit for a gateway that always pays
//! # fail_reservation = "theatre full"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tickets_core::{Money, PurchasePolicy};
use tracing::{debug, info};

use crate::error::ConfigError;

// =============================================================================
// Simulation Settings
// =============================================================================

/// Scripted failures for the in-memory collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// When set, every charge fails with this message.
    pub fail_payment: Option<String>,

    /// When set, every reservation fails with this message.
    pub fail_reservation: Option<String>,
}

// =============================================================================
// CLI Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub policy: PurchasePolicy,
    pub simulation: SimulationSettings,
}

impl CliConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `config_path` must exist; the default path is optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the purchase policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        Ok(())
    }

    /// Applies overrides read through `lookup` (the process environment in
    /// production).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(max) = parse_var(&lookup, "TICKETS_MAX_PER_PURCHASE")? {
            debug!(max, "Overriding ticket limit from environment");
            self.policy.max_tickets_per_purchase = max;
        }

        if let Some(price) = parse_var(&lookup, "TICKETS_ADULT_PRICE")? {
            self.policy.adult_price = Money::from_units(price);
        }

        if let Some(price) = parse_var(&lookup, "TICKETS_CHILD_PRICE")? {
            self.policy.child_price = Money::from_units(price);
        }

        if let Some(price) = parse_var(&lookup, "TICKETS_INFANT_PRICE")? {
            self.policy.infant_price = Money::from_units(price);
        }

        if let Some(reason) = lookup("TICKETS_FAIL_PAYMENT") {
            debug!(reason = %reason, "Payment gateway will fail");
            self.simulation.fail_payment = Some(reason);
        }

        if let Some(reason) = lookup("TICKETS_FAIL_RESERVATION") {
            debug!(reason = %reason, "Seat reservation will fail");
            self.simulation.fail_reservation = Some(reason);
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tickets", "tickets")
            .map(|dirs| dirs.config_dir().join("tickets.toml"))
    }
}

fn parse_var<F>(lookup: &F, var: &str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| {
            value.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                value,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.policy, PurchasePolicy::default());
        assert_eq!(config.simulation.fail_payment, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[policy]\nmax_tickets_per_purchase = 10\n\n[simulation]\nfail_reservation = \"theatre full\""
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.policy.max_tickets_per_purchase, 10);
        assert_eq!(config.policy.adult_price, Money::from_units(20));
        assert_eq!(
            config.simulation.fail_reservation.as_deref(),
            Some("theatre full")
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfig::load(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]\nchild_price = -5").unwrap();

        let result = CliConfig::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::InvalidPolicy(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy\nmax = ").unwrap();

        let result = CliConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_overrides(env(&[
                ("TICKETS_MAX_PER_PURCHASE", "5"),
                ("TICKETS_ADULT_PRICE", " 30 "),
                ("TICKETS_FAIL_PAYMENT", "card declined"),
            ]))
            .unwrap();

        assert_eq!(config.policy.max_tickets_per_purchase, 5);
        assert_eq!(config.policy.adult_price, Money::from_units(30));
        assert_eq!(config.policy.child_price, Money::from_units(10));
        assert_eq!(config.simulation.fail_payment.as_deref(), Some("card declined"));
        assert_eq!(config.simulation.fail_reservation, None);
    }

    #[test]
    fn test_env_override_must_be_numeric() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env_overrides(env(&[("TICKETS_CHILD_PRICE", "ten")]))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, .. } if var == "TICKETS_CHILD_PRICE"
        ));
    }

    #[test]
    fn test_price_too_large_for_limit_is_rejected() {
        let mut config = CliConfig::default();
        config
            .apply_env_overrides(env(&[
                ("TICKETS_MAX_PER_PURCHASE", "2"),
                ("TICKETS_ADULT_PRICE", "4611686018427387904"),
            ]))
            .unwrap();

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid purchase policy: adult_price must be between 0 and 4611686018427387903"
        );
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert!(toml_str.contains("[policy]"));
        assert!(toml_str.contains("max_tickets_per_purchase = 25"));
    }
}
