//! 비즈니스 로직 계층
//!
//! - [`notes`] - 노트 CRUD, 가져오기/내보내기, 소유권 정책
//! - [`users`] - 회원가입, 로그인 검증, 사용자 관리
//! - [`auth`] - JWT 발급/검증

pub mod notes;
pub mod users;
pub mod auth;
