//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 역할 요구사항 검사 (`required_with_role`)
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/notes")
//!             .wrap(AuthMiddleware::required())
//!             .configure(notes::configure_routes)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
