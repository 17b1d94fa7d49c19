use contracts::enums::UserRole;
use contracts::system::auth::{LoginRequest, UserInfo};
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::{AuthError, SessionStore};
use crate::shared::config::AuthConfig;

/// Демо-аккаунты
pub static MOCK_USERS: Lazy<Vec<UserInfo>> = Lazy::new(|| {
    vec![
        UserInfo {
            id: "1".into(),
            name: "Admin User".into(),
            email: "admin@grocery.com".into(),
            role: UserRole::Admin,
        },
        UserInfo {
            id: "2".into(),
            name: "Business Owner".into(),
            email: "owner@grocery.com".into(),
            role: UserRole::BusinessOwner,
        },
    ]
});

/// Вход по демо-аккаунтам с сохранением сессии
pub struct AuthService {
    store: Arc<dyn SessionStore>,
    password: String,
    current: Option<UserInfo>,
}

impl AuthService {
    pub fn new(store: Arc<dyn SessionStore>, password: impl Into<String>) -> Self {
        Self {
            store,
            password: password.into(),
            current: None,
        }
    }

    pub fn from_config(store: Arc<dyn SessionStore>, config: &AuthConfig) -> Self {
        Self::new(store, config.password.clone())
    }

    /// Сначала ищется аккаунт по email, затем сверяется пароль
    pub fn login(&mut self, request: &LoginRequest) -> Result<UserInfo, AuthError> {
        let user = MOCK_USERS
            .iter()
            .find(|u| u.email == request.email)
            .cloned()
            .ok_or_else(|| AuthError::UnknownAccount(request.email.clone()))?;

        if request.password != self.password {
            tracing::warn!(email = %request.email, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.store.save(&user)?;
        tracing::info!(user_id = %user.id, role = ?user.role, "User logged in");
        self.current = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.clear()?;
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        Ok(())
    }

    /// Восстановить сессию из хранилища
    pub fn restore(&mut self) -> Result<Option<UserInfo>, AuthError> {
        let user = self.store.load()?;
        if let Some(u) = &user {
            tracing::info!(user_id = %u.id, "Session restored");
        }
        self.current = user.clone();
        Ok(user)
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        self.current.as_ref()
    }
}
