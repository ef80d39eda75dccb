//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 노트 백엔드의 모든 실패 경로를 하나의 [`AppError`]로 모읍니다.
//! `thiserror`로 메시지를 정의하고 `actix_web::ResponseError`로 HTTP 상태 코드에 매핑합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError`, `MalformedInput` | 400 |
//! | `NotAuthenticated`, `InvalidCredentials` | 401 |
//! | `AuthorizationError` | 403 |
//! | `NotFound` | 404 |
//! | `ConflictError`, `UnsupportedFormat` | 409 |
//! | `DatabaseError`, `RedisError`, `InternalError` | 500 |
//!
//! 노트가 존재하지 않는 경우와 다른 사용자의 노트인 경우는 모두 `NotFound`로 응답합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn export(&self, id: i64, owner_id: &str) -> Result<EncodedNote, AppError> {
//!     let note = self.notes.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("노트를 찾을 수 없습니다".to_string()))?;
//!     // ...
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// 로그인 실패 원인
///
/// 두 경우 모두 401로 응답하지만 로그와 메시지에서는 구분합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsErrorType {
    /// 등록되지 않은 이메일
    EmailNotFound,
    /// 비밀번호 불일치
    InvalidPassword,
}

impl fmt::Display for CredentialsErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsErrorType::EmailNotFound => write!(f, "EMAIL_NOT_FOUND"),
            CredentialsErrorType::InvalidPassword => write!(f, "INVALID_PASSWORD"),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 업로드된 페이로드를 해석할 수 없음 (400 Bad Request)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 지원하지 않는 노트 포맷 (409 Conflict)
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// 검증된 사용자 정보 없음 (401 Unauthorized)
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// 로그인 자격 증명 불일치 (401 Unauthorized)
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(CredentialsErrorType),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) | AppError::UnsupportedFormat(_) => StatusCode::CONFLICT,
            AppError::NotAuthenticated(_) | AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 응답 전에 error 레벨로 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> Result<T, AppError>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
