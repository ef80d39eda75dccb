//! # MongoDB 노트 저장소
//!
//! `notes` 컬렉션에 노트를 저장하고, 식별자는 `counters` 컬렉션의
//! `{ _id: "notes", seq }` 문서를 `$inc`로 올려서 발급합니다.
//! 모든 변경은 단일 문서 연산이므로 같은 노트에 대한 동시 수정은 마지막 쓰기가 남습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::notes::{NewNote, Note};
use crate::errors::{AppError, ErrorContext};
use super::note_repo::{NoteChanges, NoteRepository};

const NOTES_COLLECTION: &str = "notes";
const COUNTERS_COLLECTION: &str = "counters";
const NOTE_COUNTER_ID: &str = "notes";

pub struct MongoNoteRepository {
    db: Arc<Database>,
}

impl MongoNoteRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn notes(&self) -> Collection<Note> {
        self.db.get_database().collection::<Note>(NOTES_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 다음 노트 식별자를 원자적으로 발급합니다.
    async fn next_id(&self) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters()
            .find_one_and_update(
                doc! { "_id": NOTE_COUNTER_ID },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("노트 ID 카운터를 갱신하지 못했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("노트 ID 카운터 형식 오류: {}", e)))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_id".to_string())
                .build())
            .build();

        self.notes()
            .create_index(owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MongoNoteRepository {
    async fn save(&self, note: NewNote) -> Result<Note, AppError> {
        let stored = note.with_id(self.next_id().await?);

        self.notes()
            .insert_one(&stored)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, AppError> {
        self.notes()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all_by_owner(&self, owner_id: &str) -> Result<Vec<Note>, AppError> {
        let cursor = self.notes()
            .find(doc! { "user_id": owner_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<Note>, AppError> {
        let modified_date = to_bson(&changes.modified_date)
            .with_context(|| format!("노트 {} 수정 시각 직렬화 실패", id))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.notes()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": {
                    "title": changes.title,
                    "content": changes.content,
                    "modified_date": modified_date,
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = self.notes()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_all_by_owner(&self, owner_id: &str) -> Result<u64, AppError> {
        let result = self.notes()
            .delete_many(doc! { "user_id": owner_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
