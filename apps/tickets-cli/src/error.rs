//! Error types for the CLI.

use std::path::PathBuf;

use tickets_core::{PurchaseError, ValidationError};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },

    #[error("Invalid purchase policy: {0}")]
    InvalidPolicy(#[from] ValidationError),
}

/// Process exit codes.
///
/// ```text
/// 0  purchase (or quote) succeeded
/// 1  request rejected before any side effect
/// 2  payment or seat reservation failed
/// 3  configuration or input could not be loaded
/// ```
pub mod exit_code {
    pub const REJECTED: i32 = 1;
    pub const COLLABORATOR_FAILED: i32 = 2;
    pub const SETUP_FAILED: i32 = 3;
}

/// Maps a purchase failure to the process exit code.
pub fn exit_code_for(error: &PurchaseError) -> i32 {
    if error.is_validation() {
        exit_code::REJECTED
    } else {
        exit_code::COLLABORATOR_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&PurchaseError::TooManyInfants { infants: 2, adults: 1 }), 1);
        assert_eq!(
            exit_code_for(&PurchaseError::PaymentFailed {
                reason: "declined".into()
            }),
            2
        );
        assert_eq!(
            exit_code_for(&PurchaseError::ReservationFailed {
                reason: "full".into()
            }),
            2
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            var: "TICKETS_ADULT_PRICE".to_string(),
            value: "twenty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for TICKETS_ADULT_PRICE: 'twenty'");
    }
}
