//! # Domain Entities Module
//!
//! 저장소에 그대로 기록되는 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Note)
//! ├── models/       ← 인증 정보, 토큰 클레임, 노트 포맷
//! └── dto/          ← 요청/응답 객체
//! ```
//!
//! ## 관계
//!
//! 노트는 반드시 한 명의 사용자에게 속합니다(`Note.user_id → User.id`).
//! 사용자를 삭제하면 그 사용자의 노트도 함께 삭제됩니다.
//! 엔티티끼리 참조를 들고 있지 않으며, 관계는 식별자로만 표현합니다.

pub mod users;
pub mod notes;

pub use users::{Role, User};
pub use notes::{NewNote, Note};
