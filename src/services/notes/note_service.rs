//! # 노트 애플리케이션 서비스
//!
//! 노트 생성/조회/수정/삭제와 파일 가져오기/내보내기를 조율합니다.
//!
//! ```text
//!   handler ──▶ NoteService ──▶ NoteOwnershipPolicy
//!                   │
//!                   ├──▶ NoteRepository (memory / MongoDB)
//!                   └──▶ note_codec (txt / json / xml)
//! ```
//!
//! ## 소유권 검사
//!
//! 수정, 삭제, 내보내기는 노트를 읽은 뒤 소유권 정책을 통과해야 합니다.
//! 노트가 없거나 다른 사용자의 노트이면 똑같이 `AppError::NotFound`를 반환해서
//! 다른 사용자의 노트 존재 여부가 드러나지 않게 합니다.
//!
//! ## 시각 규칙
//!
//! - 생성/가져오기: 생성 시각 = 수정 시각 = 현재 UTC
//! - 수정: `modified_date = max(now, 이전 modified_date)`

use std::sync::Arc;
use chrono::Utc;
use crate::codec::note_codec::{self, EncodedNote};
use crate::domain::dto::notes::NoteResponse;
use crate::domain::entities::notes::{NewNote, Note};
use crate::domain::models::format::NoteFormat;
use crate::errors::AppError;
use crate::repositories::notes::{NoteChanges, NoteRepository};
use super::ownership_policy::{AccessDecision, NoteOwnershipPolicy};

pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
}

fn note_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("노트를 찾을 수 없습니다: {}", id))
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    pub async fn create_note(&self, owner_id: &str, title: String, content: String) -> Result<NoteResponse, AppError> {
        let note = self.notes.save(NewNote::new(owner_id, title, content)).await?;

        log::info!("노트 생성: id={}, owner={}", note.id, owner_id);
        Ok(NoteResponse::from(note))
    }

    pub async fn get_user_notes(&self, owner_id: &str) -> Result<Vec<NoteResponse>, AppError> {
        let notes = self.notes.find_all_by_owner(owner_id).await?;
        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn update_note(
        &self,
        id: i64,
        title: String,
        content: String,
        requesting_user_id: &str,
    ) -> Result<NoteResponse, AppError> {
        let existing = self.load_owned(id, requesting_user_id).await?;

        let changes = NoteChanges {
            title,
            content,
            modified_date: Utc::now().max(existing.modified_date),
        };

        let updated = self.notes
            .update(id, changes)
            .await?
            .ok_or_else(|| note_not_found(id))?;

        log::info!("노트 수정: id={}, owner={}", id, requesting_user_id);
        Ok(NoteResponse::from(updated))
    }

    pub async fn delete_note(&self, id: i64, requesting_user_id: &str) -> Result<(), AppError> {
        self.load_owned(id, requesting_user_id).await?;

        if !self.notes.delete(id).await? {
            return Err(note_not_found(id));
        }

        log::info!("노트 삭제: id={}, owner={}", id, requesting_user_id);
        Ok(())
    }

    pub async fn export_note(
        &self,
        id: i64,
        requesting_user_id: &str,
        format: NoteFormat,
    ) -> Result<EncodedNote, AppError> {
        let note = self.load_owned(id, requesting_user_id).await?;

        log::debug!("노트 내보내기: id={}, format={}", id, format);
        note_codec::encode(format, &note.title, &note.content)
    }

    /// 업로드된 파일로 새 노트를 만듭니다.
    ///
    /// 확장자는 대소문자를 구분하지 않습니다. 빈 파일과 빈 제목도 그대로 저장합니다.
    pub async fn import_note(
        &self,
        owner_id: &str,
        raw_bytes: &[u8],
        filename_extension: &str,
    ) -> Result<NoteResponse, AppError> {
        let format = NoteFormat::from_extension(filename_extension)?;
        let (title, content) = note_codec::decode(format, raw_bytes)?;

        let note = self.notes.save(NewNote::new(owner_id, title, content)).await?;

        log::info!(
            "노트 가져오기: id={}, owner={}, format={}, {} bytes",
            note.id, owner_id, format, raw_bytes.len()
        );
        Ok(NoteResponse::from(note))
    }

    /// 사용자 삭제 시 그 사용자의 노트를 모두 지웁니다.
    pub async fn delete_all_for_owner(&self, owner_id: &str) -> Result<u64, AppError> {
        let deleted = self.notes.delete_all_by_owner(owner_id).await?;

        log::info!("사용자 노트 일괄 삭제: owner={}, count={}", owner_id, deleted);
        Ok(deleted)
    }

    async fn load_owned(&self, id: i64, requesting_user_id: &str) -> Result<Note, AppError> {
        let note = self.notes
            .find_by_id(id)
            .await?
            .ok_or_else(|| note_not_found(id))?;

        match NoteOwnershipPolicy::authorize(&note, requesting_user_id) {
            AccessDecision::Granted => Ok(note),
            AccessDecision::Denied => {
                log::warn!("다른 사용자의 노트 접근 거부: id={}, requester={}", id, requesting_user_id);
                Err(note_not_found(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::notes::InMemoryNoteRepository;

    fn service() -> NoteService {
        NoteService::new(Arc::new(InMemoryNoteRepository::new()))
    }

    #[actix_web::test]
    async fn test_created_note_is_listed_only_for_owner() {
        let service = service();

        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        let mine = service.get_user_notes("u1").await.unwrap();
        assert_eq!(mine, vec![created.clone()]);
        assert_eq!(created.creation_date, created.modified_date);
        assert!(service.get_user_notes("u2").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_keeps_owner_and_creation_date() {
        let service = service();
        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        let updated = service
            .update_note(created.note_id, "A2".to_string(), "B2".to_string(), "u1")
            .await
            .unwrap();

        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B2");
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.creation_date, created.creation_date);
        assert!(updated.modified_date >= created.modified_date);
    }

    #[actix_web::test]
    async fn test_modified_date_never_goes_backwards() {
        let repo = Arc::new(InMemoryNoteRepository::new());
        let service = NoteService::new(repo.clone());
        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        let future = Utc::now() + chrono::Duration::hours(1);
        repo.update(created.note_id, NoteChanges {
            title: "A".to_string(),
            content: "B".to_string(),
            modified_date: future,
        })
        .await
        .unwrap();

        let updated = service
            .update_note(created.note_id, "A3".to_string(), "B3".to_string(), "u1")
            .await
            .unwrap();
        assert_eq!(updated.modified_date, future);
    }

    #[actix_web::test]
    async fn test_foreign_note_is_reported_as_not_found() {
        let service = service();
        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        let update = service.update_note(created.note_id, "x".to_string(), "y".to_string(), "u2").await;
        assert!(matches!(update, Err(AppError::NotFound(_))));

        let delete = service.delete_note(created.note_id, "u2").await;
        assert!(matches!(delete, Err(AppError::NotFound(_))));

        let export = service.export_note(created.note_id, "u2", NoteFormat::Txt).await;
        assert!(matches!(export, Err(AppError::NotFound(_))));

        let missing = service.update_note(999, "x".to_string(), "y".to_string(), "u1").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let untouched = service.get_user_notes("u1").await.unwrap();
        assert_eq!(untouched[0].title, "A");
    }

    #[actix_web::test]
    async fn test_delete_removes_note() {
        let service = service();
        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        service.delete_note(created.note_id, "u1").await.unwrap();

        assert!(service.get_user_notes("u1").await.unwrap().is_empty());
        assert!(matches!(
            service.delete_note(created.note_id, "u1").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_export_in_each_format() {
        let service = service();
        let created = service.create_note("u1", "A".to_string(), "B".to_string()).await.unwrap();

        let txt = service.export_note(created.note_id, "u1", NoteFormat::Txt).await.unwrap();
        assert_eq!(txt.bytes, b"A\nB");

        let json = service.export_note(created.note_id, "u1", NoteFormat::Json).await.unwrap();
        assert_eq!(json.bytes, br#"{"Title":"A","Content":"B"}"#);

        let xml = service.export_note(created.note_id, "u1", NoteFormat::Xml).await.unwrap();
        assert_eq!(xml.bytes, b"<NoteDTO><Title>A</Title><Content>B</Content></NoteDTO>");
        assert_eq!(xml.content_type, "application/xml");
    }

    #[actix_web::test]
    async fn test_import_txt_creates_new_note() {
        let service = service();

        let imported = service.import_note("u1", b"Hello\nWorld", ".txt").await.unwrap();

        assert_eq!(imported.title, "Hello");
        assert_eq!(imported.content, "World");
        assert_eq!(imported.user_id, "u1");
        assert_eq!(service.get_user_notes("u1").await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_import_same_file_twice_creates_two_notes() {
        let service = service();

        let first = service.import_note("u1", br#"{"Title":"A"}"#, "JSON").await.unwrap();
        let second = service.import_note("u1", br#"{"Title":"A"}"#, "json").await.unwrap();

        assert_ne!(first.note_id, second.note_id);
    }

    #[actix_web::test]
    async fn test_import_rejects_unknown_extension_and_bad_payload() {
        let service = service();

        let unknown = service.import_note("u1", b"whatever", ".pdf").await;
        assert!(matches!(unknown, Err(AppError::UnsupportedFormat(_))));

        let malformed = service.import_note("u1", b"<oops", ".xml").await;
        assert!(matches!(malformed, Err(AppError::MalformedInput(_))));

        assert!(service.get_user_notes("u1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_import_empty_file_creates_empty_note() {
        let service = service();

        let imported = service.import_note("u1", b"", ".json").await.unwrap();
        assert_eq!(imported.title, "");
        assert_eq!(imported.content, "");
    }

    #[actix_web::test]
    async fn test_delete_all_for_owner() {
        let service = service();
        service.create_note("u1", "a".to_string(), String::new()).await.unwrap();
        service.create_note("u1", "b".to_string(), String::new()).await.unwrap();
        service.create_note("u2", "c".to_string(), String::new()).await.unwrap();

        assert_eq!(service.delete_all_for_owner("u1").await.unwrap(), 2);
        assert!(service.get_user_notes("u1").await.unwrap().is_empty());
        assert_eq!(service.get_user_notes("u2").await.unwrap().len(), 1);
    }
}
