use serde::{Deserialize, Serialize};

use crate::shared::list_query::Enumerated;

/// Роль пользователя дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    BusinessOwner,
}

impl UserRole {
    /// Заголовок дашборда для роли
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin Dashboard",
            UserRole::BusinessOwner => "Business Owner Dashboard",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl Enumerated for UserRole {
    fn all() -> &'static [Self] {
        &[UserRole::Admin, UserRole::BusinessOwner]
    }

    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::BusinessOwner => "business_owner",
        }
    }
}
