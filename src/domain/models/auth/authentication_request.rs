//! 미들웨어가 사용하는 역할 요구사항

use crate::domain::entities::users::Role;

/// 라우트 접근에 필요한 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredRole(pub Role);

impl RequiredRole {
    /// 토큰에 실린 역할 문자열이 요구 역할을 포함하는지 확인
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        user_roles.iter().any(|role| role == self.0.as_str())
    }
}
