//! # 회원가입/로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserCredentials {
    #[serde(alias = "Email")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(alias = "Password")]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
