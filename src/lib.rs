//! 노트 백엔드
//!
//! 사용자별 노트를 관리하는 REST 서비스입니다.
//! JWT 기반 회원가입/로그인, 노트 CRUD, txt/json/xml 파일 가져오기와 내보내기를 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: HS256 액세스 토큰, 역할(`Admin`, `User`) 기반 접근 제어
//! - **노트 관리**: 소유자만 조회/수정/삭제 가능, 남의 노트는 404
//! - **파일 변환**: txt / json / xml 인코딩과 디코딩
//! - **저장소**: 메모리 또는 MongoDB (+ Redis 사용자 캐시)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← NoteService, UserService, TokenService
//! └─────────────────┘
//!          │             ╲
//!          ▼              ▼
//! ┌─────────────────┐  ┌─────────────────┐
//! │  Repositories   │  │   note_codec    │
//! └─────────────────┘  └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory │ MongoDB│
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use noteapp_backend::core::AppContainer;
//! use noteapp_backend::services::auth::TokenService;
//!
//! let container = AppContainer::in_memory(TokenService::new("secret", 24), 12);
//! let user = container.user_service.create_user("a@example.com", "pw", vec![Role::User]).await?;
//! let note = container.note_service.create_note(&user.id, "Title".into(), "Body".into()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod codec;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
