//! # User Data Transfer Objects Module
//!
//! 인증과 사용자 관리 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── credentials.rs     # 회원가입/로그인 공용 {email, password}
//! │   └── update_user.rs     # 현재 사용자 수정, 이메일 조회 쿼리
//! └── response/
//!     └── user_response.rs   # 사용자 정보, 회원가입/로그인 응답
//! ```
//!
//! ## API 플로우 예제
//!
//! ```text
//! POST /api/auth/signup
//! {"email": "user@example.com", "password": "secret"}
//!
//! HTTP/1.1 201 Created
//! {"email": "user@example.com"}
//!
//! POST /api/auth/signin
//! {"email": "user@example.com", "password": "secret"}
//!
//! HTTP/1.1 200 OK
//! {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
//! ```
//!
//! `UserResponse`는 비밀번호 해시를 포함하지 않습니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::{UpdateUserRequest, UserCredentials, UserEmailQuery};
pub use response::{SignUpResponse, TokenResponse, UserResponse};
