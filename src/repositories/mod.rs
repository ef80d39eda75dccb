//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 trait 객체(`Arc<dyn NoteRepository>`, `Arc<dyn UserRepository>`)만 알고,
//! 구현체는 [`crate::core::AppContainer`]가 설정에 따라 골라서 주입합니다.
//!
//! | trait | 메모리 구현 | MongoDB 구현 |
//! |-------|-------------|--------------|
//! | `NoteRepository` | `InMemoryNoteRepository` | `MongoNoteRepository` |
//! | `UserRepository` | `InMemoryUserRepository` | `MongoUserRepository` (+ Redis 캐시) |
//!
//! 모든 메서드는 단일 문서 단위로 원자적입니다. 여러 문서에 걸친 트랜잭션은 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::notes::{InMemoryNoteRepository, NoteRepository};
//!
//! let notes: Arc<dyn NoteRepository> = Arc::new(InMemoryNoteRepository::new());
//! let mine = notes.find_all_by_owner("user-id").await?;
//! ```

pub mod notes;
pub mod users;
