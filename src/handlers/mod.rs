//! # HTTP Handlers
//!
//! 요청 DTO 검증, 현재 사용자 확인, 서비스 호출, 응답 변환만 담당합니다.
//! 서비스는 `web::Data`로 주입되고, 실패는 `AppError`의 `ResponseError` 구현이 상태 코드로 바꿉니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_note(
//!     auth: AuthenticatedUser,
//!     user_service: web::Data<UserService>,
//!     note_service: web::Data<NoteService>,
//!     payload: web::Json<CreateNoteRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let user = user_service.resolve_current_user(&auth).await?;
//!     ...
//!     Ok(HttpResponse::Created().json(note))
//! }
//! ```
//!
//! - [`auth`] - 회원가입, 로그인
//! - [`notes`] - 노트 CRUD, 업로드/다운로드
//! - [`users`] - 사용자 조회/수정/삭제

pub mod auth;
pub mod notes;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::AppContainer;
    use crate::domain::entities::users::{Role, User};
    use crate::services::auth::TokenService;

    pub const TEST_SECRET: &str = "handler-test-secret";

    /// 메모리 저장소와 낮은 bcrypt cost로 조립한 컨테이너
    pub fn test_container() -> AppContainer {
        AppContainer::in_memory(TokenService::new(TEST_SECRET, 1), 4)
    }

    /// `Authorization` 헤더 값
    pub fn bearer(container: &AppContainer, user: &User) -> String {
        let token = container.token_service.generate_access_token(user).unwrap();
        format!("Bearer {}", token)
    }

    pub async fn register(container: &AppContainer, email: &str) -> (User, String) {
        let user = container
            .user_service
            .create_user(email, "password", vec![Role::User])
            .await
            .unwrap();
        let header = bearer(container, &user);
        (user, header)
    }
}
