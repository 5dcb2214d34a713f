use thiserror::Error;
use uuid::Uuid;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Contract not found: {0}")]
    ContractNotFound(Uuid),
    #[error("User not found: {0}")]
    UserNotFound(Uuid),
    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Entries before `index` stay applied; nothing is rolled back.
    #[error("Rate batch failed at entry {index} (user {user_id}) after {applied} applied: {source}")]
    RateBatchFailed {
        index: usize,
        user_id: Uuid,
        applied: usize,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Returns `true` for errors caused by an unresolved identifier.
    pub fn is_not_found(&self) -> bool {
        match self {
            CoreError::ContractNotFound(_)
            | CoreError::UserNotFound(_)
            | CoreError::ProjectNotFound(_) => true,
            CoreError::RateBatchFailed { source, .. } => source.is_not_found(),
            CoreError::Validation(_) => false,
        }
    }
}
