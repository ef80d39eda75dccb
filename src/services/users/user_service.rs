//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인 검증, 현재 사용자 확인, 조회/수정/삭제를 담당합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      UserService                        │
//! │                                                         │
//! │  Registration   ─ 이메일 중복 검사, bcrypt 해싱          │
//! │  Authentication ─ EmailNotFound / InvalidPassword 구분   │
//! │  Current User   ─ 토큰 이메일로 저장된 사용자 재확인     │
//! │  Account Mgmt   ─ 수정, 삭제 (노트 연쇄 삭제)            │
//! └─────────────────────────────────────────────────────────┘
//!                │                           │
//!                ▼                           ▼
//!        UserRepository                NoteService
//!   (memory / MongoDB + Redis)    (delete_all_for_owner)
//! ```
//!
//! ## 비밀번호 보안
//!
//! - bcrypt 해시만 저장하며 응답 DTO에는 포함되지 않습니다.
//! - cost는 생성 시 주입됩니다. 운영에서는 `PasswordConfig::bcrypt_cost()`를 사용합니다.

use std::sync::Arc;
use std::time::Instant;
use bcrypt::hash;
use crate::domain::dto::users::{UpdateUserRequest, UserResponse};
use crate::domain::entities::users::{Role, User};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, CredentialsErrorType, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::services::notes::NoteService;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 사용자 삭제 시 노트를 먼저 지우기 때문에 `NoteService`를 함께 보유합니다.
pub struct UserService {
    users: Arc<dyn UserRepository>,

    notes: Arc<NoteService>,

    /// bcrypt 해싱 비용
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, notes: Arc<NoteService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            notes,
            bcrypt_cost,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let hash_start = Instant::now();
        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    /// 새 사용자 계정 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일(대소문자 무시)이 이미 있음
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_user(&self, email: &str, password: &str, roles: Vec<Role>) -> Result<User, AppError> {
        let start_time = Instant::now();

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash = self.hash_password(password)?;
        let user = self.users
            .create(User::new_local(email.trim().to_string(), password_hash, roles))
            .await?;

        log::info!("사용자 등록: {} ({})", user.email, user.id);
        log::debug!("Total user creation took: {:?}", start_time.elapsed());

        Ok(user)
    }

    /// 이메일/비밀번호 검증
    ///
    /// 성공 시 저장된 사용자를 반환합니다. 실패 원인은 `CredentialsErrorType`으로 구분됩니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let start_time = Instant::now();

        let Some(user) = self.users.find_by_email(email).await? else {
            log::warn!("로그인 실패 (이메일 없음): {}", email);
            return Err(AppError::InvalidCredentials(CredentialsErrorType::EmailNotFound));
        };

        let is_valid = bcrypt::verify(password, &user.password_hash).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", start_time.elapsed());

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::InvalidCredentials(CredentialsErrorType::InvalidPassword));
        }

        Ok(user)
    }

    /// 토큰의 이메일로 저장된 사용자를 다시 찾습니다.
    ///
    /// 토큰 발급 뒤 삭제되었거나 이메일이 바뀐 사용자는 `NotAuthenticated`입니다.
    pub async fn resolve_current_user(&self, auth: &AuthenticatedUser) -> Result<User, AppError> {
        self.users
            .find_by_email(&auth.email)
            .await?
            .ok_or_else(|| AppError::NotAuthenticated("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserResponse, AppError> {
        self.users
            .find_by_email(email)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 현재 사용자의 이메일/비밀번호 변경
    ///
    /// 비어 있는 필드는 그대로 둡니다. 이메일이 바뀌면 기존 토큰은 더 이상 사용자를
    /// 찾지 못하므로 다시 로그인해야 합니다.
    pub async fn update_current_user(
        &self,
        auth: &AuthenticatedUser,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut user = self.resolve_current_user(auth).await?;

        if let Some(email) = request.new_email() {
            user.change_email(email.to_string());
        }

        if let Some(password) = request.new_password() {
            let password_hash = self.hash_password(password)?;
            user.change_password_hash(password_hash);
        }

        let updated = self.users
            .update(user)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("사용자 정보 수정: {}", updated.id);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// 노트를 먼저 모두 지운 뒤 사용자를 삭제합니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.notes.delete_all_for_owner(id).await?;

        if !self.users.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제: {}", id);
        Ok(())
    }

    /// 관리자 계정이 없으면 만듭니다.
    ///
    /// 이미 있으면 아무것도 바꾸지 않고 `false`를 반환합니다.
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            log::debug!("관리자 계정이 이미 있습니다: {}", email);
            return Ok(false);
        }

        self.create_user(email, password, vec![Role::Admin, Role::User]).await?;
        log::info!("관리자 계정 생성: {}", email);
        Ok(true)
    }
}
