//! 애플리케이션 서비스 조립
//!
//! 저장소와 서비스를 생성자로 직접 연결하고, actix `app_data`로 등록합니다.
//!
//! ```text
//! TokenService ─────────────────────────────┐
//! NoteRepository ──▶ NoteService ──┐        │
//! UserRepository ──────────────────┴▶ UserService
//!                                           │
//!                          AppContainer::configure(cfg)
//!                                           ▼
//!                         web::Data<NoteService | UserService | TokenService>
//! ```

use std::sync::Arc;
use actix_web::web;
use crate::caching::redis::RedisClient;
use crate::config::{PasswordConfig, StorageBackend, StorageConfig};
use crate::db::Database;
use crate::errors::AppError;
use crate::repositories::notes::{InMemoryNoteRepository, MongoNoteRepository, NoteRepository};
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::auth::TokenService;
use crate::services::notes::NoteService;
use crate::services::users::UserService;

/// 요청 처리에 필요한 서비스 묶음
///
/// 워커마다 `configure`가 호출되므로 복제 비용은 `Arc` 복제뿐입니다.
#[derive(Clone)]
pub struct AppContainer {
    pub note_service: Arc<NoteService>,
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub storage_backend: StorageBackend,
}

impl AppContainer {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        users: Arc<dyn UserRepository>,
        token_service: TokenService,
        bcrypt_cost: u32,
        storage_backend: StorageBackend,
    ) -> Self {
        let note_service = Arc::new(NoteService::new(notes));
        let user_service = Arc::new(UserService::new(users, note_service.clone(), bcrypt_cost));

        Self {
            note_service,
            user_service,
            token_service: Arc::new(token_service),
            storage_backend,
        }
    }

    /// 메모리 저장소로 조립합니다. 프로세스가 끝나면 데이터도 사라집니다.
    pub fn in_memory(token_service: TokenService, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(InMemoryNoteRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            token_service,
            bcrypt_cost,
            StorageBackend::Memory,
        )
    }

    /// 환경 변수 설정에 따라 저장소를 연결하고 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    /// * `AppError::RedisError` - `REDIS_URL`이 설정되었지만 연결 실패
    pub async fn from_environment() -> Result<Self, AppError> {
        let token_service = TokenService::from_config();
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        match StorageConfig::backend() {
            StorageBackend::Memory => {
                log::info!("💾 메모리 저장소 사용");
                Ok(Self::in_memory(token_service, bcrypt_cost))
            }
            StorageBackend::Mongo => {
                log::info!("📡 데이터베이스 연결 중...");

                let database = Database::new(&StorageConfig::mongodb_uri(), &StorageConfig::database_name())
                    .await
                    .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;
                let database = Arc::new(database);

                log::info!("✅ MongoDB 연결 성공: {}", database.database_name());

                let redis = match StorageConfig::redis_url() {
                    Some(url) => {
                        let client = RedisClient::new(&url)
                            .await
                            .map_err(|e| AppError::RedisError(format!("Redis 연결 실패: {}", e)))?;
                        log::info!("✅ Redis 연결 성공");
                        Some(Arc::new(client))
                    }
                    None => {
                        log::info!("REDIS_URL 미설정, 사용자 캐시 비활성화");
                        None
                    }
                };

                let notes = MongoNoteRepository::new(database.clone());
                notes.create_indexes().await?;

                let users = MongoUserRepository::new(database, redis, StorageConfig::user_cache_ttl_seconds());
                users.create_indexes().await?;

                Ok(Self::new(
                    Arc::new(notes),
                    Arc::new(users),
                    token_service,
                    bcrypt_cost,
                    StorageBackend::Mongo,
                ))
            }
        }
    }

    /// 서비스를 `web::Data`로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.note_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::new(self.storage_backend));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_in_memory_container_shares_note_service() {
        let container = AppContainer::in_memory(TokenService::new("secret", 1), 4);
        assert_eq!(container.storage_backend, StorageBackend::Memory);

        let user = container
            .user_service
            .create_user("a@example.com", "pw", vec![crate::domain::entities::users::Role::User])
            .await
            .unwrap();
        container.note_service.create_note(&user.id, "t".to_string(), String::new()).await.unwrap();

        container.user_service.delete_user(&user.id).await.unwrap();
        assert!(container.note_service.get_user_notes(&user.id).await.unwrap().is_empty());
    }
}
