pub mod service;
pub mod session;

use thiserror::Error;

pub use service::{AuthService, MOCK_USERS};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};

/// Ошибки авторизации
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Session data is corrupted: {0}")]
    Session(#[from] serde_json::Error),
}
