//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명한 액세스 토큰을 발급하고 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// 서명 키와 만료 시간은 생성 시점에 고정됩니다.
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            roles: user.role_names(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::NotAuthenticated` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::NotAuthenticated("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::NotAuthenticated(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::NotAuthenticated("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
