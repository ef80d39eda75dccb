//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 이메일 정규화, 파일 확장자 추출
//! - [`display_terminal`] - 시작 배너 출력

pub mod string_utils;
pub mod display_terminal;
