use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::TokenClaims;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 토큰이 검증되었다는 사실만 나타냅니다. 사용자가 아직 존재하는지는
/// `UserService::resolve_current_user`가 이메일로 다시 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 토큰 발급 시점의 이메일
    pub email: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            roles: claims.roles,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims() {
        let claims = TokenClaims {
            sub: "id-1".to_string(),
            email: "a@b.c".to_string(),
            roles: vec!["User".to_string()],
            iat: 0,
            exp: 1,
        };

        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.user_id, "id-1");
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.roles, vec!["User".to_string()]);
    }
}
