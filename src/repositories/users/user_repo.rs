//! # 사용자 저장소 계약

use async_trait::async_trait;
use crate::domain::entities::users::User;
use crate::errors::AppError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일로 조회합니다. 대소문자를 구분하지 않습니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 같은 이메일이 이미 있으면 `ConflictError`
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 식별자가 같은 사용자를 통째로 교체합니다. 없으면 `None`.
    ///
    /// 바꾼 이메일이 다른 사용자와 겹치면 `ConflictError`
    async fn update(&self, user: User) -> Result<Option<User>, AppError>;

    /// 삭제했으면 `true`
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
