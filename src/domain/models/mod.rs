//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): 저장소에 기록되는 `User`, `Note`
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/     ← AuthenticatedUser, RequiredRole
//! ├── token/    ← JWT 클레임
//! └── format/   ← txt / json / xml 노트 포맷
//! ```

pub mod auth;
pub mod token;
pub mod format;

pub use auth::{AuthenticatedUser, RequiredRole};
pub use token::TokenClaims;
pub use format::NoteFormat;
