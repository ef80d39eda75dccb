//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 회원가입과 로그인을 처리합니다.
//! 로그인에 성공하면 HS256으로 서명한 JWT 액세스 토큰을 발급합니다.
//!
//! - `POST /api/auth/signup` → 201 `{ "email": ... }`
//! - `POST /api/auth/signin` → 200 `{ "token": ... }`
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::{SignUpResponse, TokenResponse, UserCredentials};
use crate::domain::entities::users::Role;
use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// 새 계정은 `User` 역할만 가집니다.
///
/// # Endpoint
/// `POST /api/auth/signup`
#[post("/signup")]
pub async fn sign_up(
    user_service: web::Data<UserService>,
    payload: web::Json<UserCredentials>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service
        .create_user(&payload.email, &payload.password, vec![Role::User])
        .await?;

    Ok(HttpResponse::Created().json(SignUpResponse { email: user.email }))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/signin`
#[post("/signin")]
pub async fn sign_in(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<UserCredentials>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    log::info!("로컬 로그인 - 사용자: {}, ID: {}", user.email, user.id);

    let token = token_service.generate_access_token(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.email, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::handlers::test_support::test_container;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_signup_then_signin_returns_usable_token() {
        let container = test_container();
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "email": "new@example.com", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "new@example.com");

        let req = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(json!({ "Email": "NEW@example.com", "Password": "secret" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "new@example.com");
        assert!(me.get("passwordHash").is_none());
        assert!(me.get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_signup_duplicate_and_invalid_input() {
        let container = test_container();
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let signup = |email: &str| {
            test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(json!({ "email": email, "password": "secret" }))
                .to_request()
        };

        assert_eq!(test::call_service(&app, signup("dup@example.com")).await.status().as_u16(), 201);
        assert_eq!(test::call_service(&app, signup("DUP@example.com")).await.status().as_u16(), 409);
        assert_eq!(test::call_service(&app, signup("not-an-email")).await.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_signin_failures_are_unauthorized() {
        let container = test_container();
        container
            .user_service
            .create_user("known@example.com", "secret", vec![crate::domain::entities::users::Role::User])
            .await
            .unwrap();
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let wrong_password = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(json!({ "email": "known@example.com", "password": "nope" }))
            .to_request();
        assert_eq!(test::call_service(&app, wrong_password).await.status().as_u16(), 401);

        let unknown = test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(json!({ "email": "ghost@example.com", "password": "secret" }))
            .to_request();
        assert_eq!(test::call_service(&app, unknown).await.status().as_u16(), 401);
    }
}
