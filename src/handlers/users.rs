//! # User Management HTTP Handlers
//!
//! `/api/users` 스코프의 핸들러입니다. 스코프 전체가 `AuthMiddleware::required()` 뒤에 있고,
//! 사용자 삭제는 `Admin` 역할이 추가로 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/all` | 전체 사용자 목록 | 200 OK |
//! | `GET` | `/api/users/me` | 현재 사용자 | 200 OK |
//! | `PUT` | `/api/users/me` | 현재 사용자 이메일/비밀번호 수정 | 200 OK |
//! | `GET` | `/api/users/{id}` | ID로 조회 | 200 OK |
//! | `GET` | `/api/users?email=` | 이메일로 조회 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 사용자와 노트 삭제 (Admin) | 204 No Content |
//!
//! `/all`, `/me`는 `/{user_id}`보다 먼저 등록해야 합니다.

use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::{UpdateUserRequest, UserEmailQuery, UserResponse};
use crate::domain::entities::users::Role;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

#[get("/all")]
pub async fn get_all_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.get_all_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/me")]
pub async fn get_current_user(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.resolve_current_user(&auth).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 현재 사용자 정보 수정
///
/// 이메일을 바꾸면 기존 토큰으로는 더 이상 사용자를 찾을 수 없습니다.
#[put("/me")]
pub async fn update_current_user(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service
        .update_current_user(&auth, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("")]
pub async fn get_user_by_email(
    user_service: web::Data<UserService>,
    query: web::Query<UserEmailQuery>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 (Admin)
///
/// 사용자의 노트를 먼저 모두 삭제합니다.
#[delete("/{user_id}", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    user_service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use crate::domain::entities::users::Role;
    use serde_json::{json, Value};
    use crate::handlers::test_support::{bearer, register, test_container};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_lookup_endpoints() {
        let container = test_container();
        let (user, token) = register(&container, "a@example.com").await;
        register(&container, "b@example.com").await;
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/all")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", user.id))
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let by_id: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_id["email"], "a@example.com");

        let req = test::TestRequest::get()
            .uri("/api/users?email=B@example.com")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let by_email: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_email["email"], "b@example.com");

        let req = test::TestRequest::get()
            .uri("/api/users/missing-id")
            .insert_header(("Authorization", token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_update_me_and_email_collision() {
        let container = test_container();
        let (_, token) = register(&container, "a@example.com").await;
        register(&container, "taken@example.com").await;
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/me")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "email": "taken@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 409);

        let req = test::TestRequest::put()
            .uri("/api/users/me")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "email": "bad-email" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);

        let req = test::TestRequest::put()
            .uri("/api/users/me")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "email": "renamed@example.com", "password": "" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["email"], "renamed@example.com");

        // 토큰의 이메일로는 더 이상 사용자를 찾을 수 없음
        let req = test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn test_delete_requires_admin_and_cascades_notes() {
        let container = test_container();
        let (victim, victim_token) = register(&container, "victim@example.com").await;
        container
            .note_service
            .create_note(&victim.id, "t".to_string(), "c".to_string())
            .await
            .unwrap();
        let admin = container
            .user_service
            .create_user("admin@admin.com", "adminPassword", vec![Role::Admin, Role::User])
            .await
            .unwrap();
        let admin_token = bearer(&container, &admin);
        let app = test::init_service(
            App::new().configure(|cfg| container.configure(cfg)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", victim.id))
            .insert_header(("Authorization", victim_token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 403);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", victim.id))
            .insert_header(("Authorization", admin_token.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 204);
        assert!(container.note_service.get_user_notes(&victim.id).await.unwrap().is_empty());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", victim.id))
            .insert_header(("Authorization", admin_token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);
    }
}
