use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            roles,
            created_at,
            updated_at,
        }
    }
}

/// 회원가입 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub email: String,
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new_local("a@b.com".to_string(), "secret-hash".to_string(), vec![Role::User]);
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["roles"][0], "User");
        assert!(json.get("createdAt").is_some());
    }
}
