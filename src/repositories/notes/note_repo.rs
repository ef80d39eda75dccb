//! # 노트 저장소 계약

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domain::entities::notes::{NewNote, Note};
use crate::errors::AppError;

/// `update`가 덮어쓰는 필드
///
/// 소유자와 생성 시각은 이 경로로 바꿀 수 없습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteChanges {
    pub title: String,
    pub content: String,
    pub modified_date: DateTime<Utc>,
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// 새 식별자를 발급해 저장합니다. 같은 내용이어도 항상 새 노트가 됩니다.
    async fn save(&self, note: NewNote) -> Result<Note, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, AppError>;

    /// 소유자의 노트를 식별자 오름차순으로 반환합니다.
    async fn find_all_by_owner(&self, owner_id: &str) -> Result<Vec<Note>, AppError>;

    /// 없는 노트면 `None`
    async fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<Note>, AppError>;

    /// 삭제했으면 `true`
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// 소유자의 노트를 모두 지우고 지운 개수를 반환합니다.
    async fn delete_all_by_owner(&self, owner_id: &str) -> Result<u64, AppError>;
}
