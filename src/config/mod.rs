//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 값은 환경 변수에서 읽으며, `main`에서 `dotenv`로 프로파일별 `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 업로드 관련 설정
//! - [`auth_config`] - JWT, 관리자 시드 계정 설정
//!
//! ## 설계 원칙
//!
//! 설정 구조체는 상태를 갖지 않는 유닛 구조체이며 연관 함수로 값을 제공합니다.
//! 값이 없거나 파싱할 수 없으면 개발용 기본값을 사용합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
