//! # 메모리 노트 저장소
//!
//! 프로세스 메모리에 노트를 보관합니다. 개발 서버와 테스트의 기본 저장소입니다.
//! 테이블 전체를 하나의 `RwLock`으로 감싸므로 같은 노트에 대한 쓰기는 직렬화되고
//! 읽기는 서로 막지 않습니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::entities::notes::{NewNote, Note};
use crate::errors::AppError;
use super::note_repo::{NoteChanges, NoteRepository};

#[derive(Debug, Default)]
struct NoteTable {
    rows: BTreeMap<i64, Note>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    table: RwLock<NoteTable>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, NoteTable>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("노트 테이블 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, NoteTable>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("노트 테이블 잠금이 손상되었습니다".to_string()))
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn save(&self, note: NewNote) -> Result<Note, AppError> {
        let mut table = self.write()?;
        table.last_id += 1;

        let stored = note.with_id(table.last_id);
        table.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, owner_id: &str) -> Result<Vec<Note>, AppError> {
        let table = self.read()?;

        Ok(table
            .rows
            .values()
            .filter(|note| note.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<Note>, AppError> {
        let mut table = self.write()?;

        let Some(note) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        note.title = changes.title;
        note.content = changes.content;
        note.modified_date = changes.modified_date;

        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn delete_all_by_owner(&self, owner_id: &str) -> Result<u64, AppError> {
        let mut table = self.write()?;
        let before = table.rows.len();

        table.rows.retain(|_, note| !note.is_owned_by(owner_id));

        Ok((before - table.rows.len()) as u64)
    }
}
