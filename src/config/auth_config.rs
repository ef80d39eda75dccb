//! # Authentication Configuration Module
//!
//! JWT 서명과 초기 관리자 계정 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### 관리자 시드 계정
//! ```bash
//! export ADMIN_EMAIL="admin@admin.com"
//! export ADMIN_PASSWORD="adminPassword"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 서버 기동 시 생성되는 관리자 계정 설정
pub struct AdminSeedConfig;

impl AdminSeedConfig {
    pub fn email() -> String {
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@admin.com".to_string())
    }

    pub fn password() -> String {
        env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| {
                log::warn!("ADMIN_PASSWORD not set, using default (not secure for production!)");
                "adminPassword".to_string()
            })
    }
}
