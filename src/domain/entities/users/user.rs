//! User Entity Implementation
//!
//! 이메일/패스워드로 가입하는 사용자 모델입니다.
//! 비밀번호는 bcrypt 해시로만 보관하며 노트 쪽 코드는 이 값을 다루지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use crate::utils::string_utils::normalize_email;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열
    #[serde(rename = "_id")]
    pub id: String,
    /// 가입 시 입력한 이메일
    pub email: String,
    /// 대소문자 구분 없는 조회용 이메일 (unique)
    pub normalized_email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 식별자는 생성 시점에 발급되며 이후 바뀌지 않습니다.
    pub fn new_local(email: String, password_hash: String, roles: Vec<Role>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            normalized_email: normalize_email(&email),
            email,
            password_hash,
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// JWT 클레임에 싣는 역할 문자열 목록
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.as_str().to_string()).collect()
    }

    /// 이메일을 바꾸고 정규화 값을 함께 갱신합니다.
    pub fn change_email(&mut self, email: String) {
        self.normalized_email = normalize_email(&email);
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_normalizes_email() {
        let user = User::new_local("Alice@Example.COM".to_string(), "hash".to_string(), vec![Role::User]);

        assert_eq!(user.email, "Alice@Example.COM");
        assert_eq!(user.normalized_email, "alice@example.com");
        assert!(Uuid::parse_str(&user.id).is_ok());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_role_names() {
        let user = User::new_local("a@b.c".to_string(), "hash".to_string(), vec![Role::Admin, Role::User]);

        assert_eq!(user.role_names(), vec!["Admin".to_string(), "User".to_string()]);
    }

    #[test]
    fn test_change_email_updates_normalized_value() {
        let mut user = User::new_local("old@example.com".to_string(), "hash".to_string(), vec![Role::User]);
        user.change_email("New@Example.com".to_string());

        assert_eq!(user.normalized_email, "new@example.com");
        assert!(user.updated_at >= user.created_at);
    }
}
