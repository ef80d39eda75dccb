//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 노트 백엔드가 다루는 데이터 구조를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - User, Note (저장소 문서와 1:1)
//! ├── DTOs          - HTTP 요청/응답 계약
//! └── Models        - 인증 사용자, JWT 클레임, 노트 포맷
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories: memory / MongoDB + Redis)
//! ```
//!
//! ## 계층 간 변환
//!
//! | 방향 | 변환 |
//! |------|------|
//! | 요청 → 서비스 | `CreateNoteRequest`, `UserCredentials` 검증 후 필드 전달 |
//! | 서비스 → 응답 | `NoteResponse::from(Note)`, `UserResponse::from(User)` |
//! | 엔티티 → 저장소 | serde 직렬화 (`_id` 필드 이름 변경) |
//!
//! 응답 DTO는 비밀번호 해시 같은 내부 필드를 포함하지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{NewNote, Note, Role, User};
pub use dto::{
    CreateNoteRequest, DownloadQuery, NoteResponse, SignUpResponse, TokenResponse, UpdateNoteRequest,
    UpdateUserRequest, UserCredentials, UserEmailQuery, UserResponse,
};
pub use models::{AuthenticatedUser, NoteFormat, RequiredRole, TokenClaims};
