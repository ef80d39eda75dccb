//! # 메모리 사용자 저장소

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::utils::string_utils::normalize_email;
use super::user_repo::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 테이블 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 테이블 잠금이 손상되었습니다".to_string()))
    }
}

fn email_taken_by_other(users: &HashMap<String, User>, user: &User) -> bool {
    users
        .values()
        .any(|existing| existing.normalized_email == user.normalized_email && existing.id != user.id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let normalized = normalize_email(email);

        Ok(self
            .read()?
            .values()
            .find(|user| user.normalized_email == normalized)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.email.cmp(&b.email)));
        Ok(users)
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if email_taken_by_other(&users, &user) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<Option<User>, AppError> {
        let mut users = self.write()?;

        if !users.contains_key(&user.id) {
            return Ok(None);
        }

        if email_taken_by_other(&users, &user) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.write()?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;

    fn user(email: &str) -> User {
        User::new_local(email.to_string(), "hash".to_string(), vec![Role::User])
    }

    #[actix_web::test]
    async fn test_find_by_email_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("Alice@Example.com")).await.unwrap();

        let found = repo.find_by_email("alice@EXAMPLE.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }

    #[actix_web::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("bob@example.com")).await.unwrap();

        let result = repo.create(user("BOB@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_rejects_email_of_other_user() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("a@example.com")).await.unwrap();
        let mut b = repo.create(user("b@example.com")).await.unwrap();

        b.change_email("A@example.com".to_string());
        assert!(matches!(repo.update(b).await, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_missing_user_returns_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.update(user("ghost@example.com")).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("c@example.com")).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
