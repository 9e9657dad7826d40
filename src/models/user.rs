use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub app_role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

impl UserRole {
    /// Role as recorded in `users.app_role`. A missing row, a failed lookup
    /// or an unknown value all mean "not an admin".
    pub fn from_lookup(role: Option<&str>) -> Self {
        match role {
            Some("admin") => UserRole::Admin,
            _ => UserRole::Customer,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_lookup() {
        assert_eq!(UserRole::from_lookup(Some("admin")), UserRole::Admin);
        assert_eq!(UserRole::from_lookup(Some("customer")), UserRole::Customer);
        assert_eq!(UserRole::from_lookup(Some("editor")), UserRole::Customer);
        assert_eq!(UserRole::from_lookup(None), UserRole::Customer);
    }
}
