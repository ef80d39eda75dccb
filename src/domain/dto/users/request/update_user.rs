use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// 현재 사용자 정보 수정 요청
///
/// 비어 있는 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, alias = "Email")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,

    #[serde(default, alias = "Password")]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// 실제로 바꿀 이메일 (공백만 있는 값은 무시)
    pub fn new_email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

fn validate_optional_email(email: &String) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email")
        .with_message("유효한 이메일 주소를 입력해주세요".into()))
}

/// `GET /api/users?email=` 쿼리
#[derive(Debug, Deserialize)]
pub struct UserEmailQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_ignored() {
        let request = UpdateUserRequest {
            email: Some("  ".to_string()),
            password: Some(String::new()),
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.new_email(), None);
        assert_eq!(request.new_password(), None);
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = UpdateUserRequest {
            email: Some("nope".to_string()),
            password: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_changes_are_exposed() {
        let request = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            password: Some("pw".to_string()),
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.new_email(), Some("new@example.com"));
        assert_eq!(request.new_password(), Some("pw"));
    }
}
