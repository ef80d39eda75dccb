//! 캐시 계층
//!
//! MongoDB 사용자 저장소가 조회 결과를 Redis에 캐싱할 때 사용합니다.

pub mod redis;
