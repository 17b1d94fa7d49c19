use thiserror::Error;

use super::sync::SyncError;

/// Ошибки операций экранов
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} already exists: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid status change: {0}")]
    InvalidTransition(String),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
