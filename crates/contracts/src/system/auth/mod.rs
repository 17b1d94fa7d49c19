use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Пользователь дашборда, как он хранится в сессии
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_json_shape() {
        let user = UserInfo {
            id: "2".into(),
            name: "Business Owner".into(),
            email: "owner@grocery.com".into(),
            role: UserRole::BusinessOwner,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"2","name":"Business Owner","email":"owner@grocery.com","role":"business_owner"}"#
        );
        let back: UserInfo = serde_json::from_str(&json).unwrap();
        assert!(!back.is_admin());
    }
}
