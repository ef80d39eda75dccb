//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 검증하고, 응답 DTO는 엔티티에서 `From`으로 변환합니다.

pub mod users;
pub mod notes;

pub use users::{
    SignUpResponse, TokenResponse, UpdateUserRequest, UserCredentials, UserEmailQuery, UserResponse,
};
pub use notes::{CreateNoteRequest, DownloadQuery, NoteResponse, UpdateNoteRequest};
