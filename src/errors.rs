use std::result::Result as StdResult;

use tally_config::ConfigError;
use tally_core::CoreError;
use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the billing facade.
#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Entries before `index` were applied and remain in place.
    #[error("Rate batch stopped at entry {index} (user {user_id}), {applied} applied: {reason}")]
    PartialBatch {
        index: usize,
        user_id: Uuid,
        applied: usize,
        reason: String,
    },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, BillingError>;

impl From<CoreError> for BillingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ContractNotFound(id) => BillingError::NotFound(format!("contract {id}")),
            CoreError::UserNotFound(id) => BillingError::NotFound(format!("user {id}")),
            CoreError::ProjectNotFound(id) => BillingError::NotFound(format!("project {id}")),
            CoreError::Validation(message) => BillingError::InvalidInput(message),
            CoreError::RateBatchFailed {
                index,
                user_id,
                applied,
                source,
            } => BillingError::PartialBatch {
                index,
                user_id,
                applied,
                reason: source.to_string(),
            },
        }
    }
}

impl From<ConfigError> for BillingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => BillingError::StorageError(io.to_string()),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                BillingError::ConfigError(message)
            }
        }
    }
}

impl From<serde_json::Error> for BillingError {
    fn from(err: serde_json::Error) -> Self {
        BillingError::StorageError(err.to_string())
    }
}
