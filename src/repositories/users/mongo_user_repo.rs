//! # MongoDB 사용자 저장소
//!
//! MongoDB를 주 저장소로 사용하고, Redis가 설정된 경우 이메일/ID 조회 결과를 캐싱합니다.
//!
//! ## 캐시 키
//!
//! - `user:email:{정규화된 이메일}`
//! - `user:id:{사용자 ID}`
//!
//! 캐시 읽기/쓰기 실패는 요청을 실패시키지 않고 MongoDB 결과를 그대로 사용합니다.
//! 수정/삭제 시 관련 키를 지웁니다.
//!
//! 이메일 중복은 쓰기 전에 먼저 확인하지만, 동시에 들어온 요청은 `normalized_email`
//! 유니크 인덱스가 막습니다. 이때의 E11000 에러도 `ConflictError`로 변환됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::utils::string_utils::normalize_email;
use super::user_repo::UserRepository;

const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

fn write_error_code(error: &MongoError) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        ErrorKind::Command(command_error) => Some(command_error.code),
        _ => None,
    }
}

/// 쓰기 실패를 `AppError`로 변환합니다. 중복 키는 409가 됩니다.
fn write_failure(code: Option<i32>, message: String) -> AppError {
    match code {
        Some(DUPLICATE_KEY_CODE) => {
            log::warn!("이메일 유니크 인덱스 충돌: {}", message);
            AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
        }
        _ => AppError::DatabaseError(message),
    }
}

fn map_write_error(error: MongoError) -> AppError {
    write_failure(write_error_code(&error), error.to_string())
}

pub struct MongoUserRepository {
    db: Arc<Database>,

    redis: Option<Arc<RedisClient>>,

    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, redis: Option<Arc<RedisClient>>, cache_ttl_seconds: u64) -> Self {
        Self {
            db,
            redis,
            cache_ttl_seconds,
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn email_key(normalized_email: &str) -> String {
        format!("user:email:{}", normalized_email)
    }

    fn id_key(id: &str) -> String {
        format!("user:id:{}", id)
    }

    async fn cached(&self, key: &str) -> Option<User> {
        let redis = self.redis.as_ref()?;

        match redis.get::<User>(key).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("사용자 캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn cache(&self, user: &User) {
        let Some(redis) = self.redis.as_ref() else {
            return;
        };

        for key in [Self::email_key(&user.normalized_email), Self::id_key(&user.id)] {
            if let Err(e) = redis.set_with_expiry(&key, user, self.cache_ttl_seconds).await {
                log::warn!("사용자 캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }

    async fn invalidate(&self, user: &User) {
        let Some(redis) = self.redis.as_ref() else {
            return;
        };

        let keys = vec![Self::email_key(&user.normalized_email), Self::id_key(&user.id)];
        if let Err(e) = redis.del_multiple(&keys).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", user.id, e);
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "normalized_email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("normalized_email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn email_taken_by_other(&self, user: &User) -> Result<bool, AppError> {
        let existing = self.collection()
            .find_one(doc! {
                "normalized_email": &user.normalized_email,
                "_id": { "$ne": &user.id },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(existing.is_some())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let normalized = normalize_email(email);

        if let Some(cached) = self.cached(&Self::email_key(&normalized)).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "normalized_email": &normalized })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.cache(user).await;
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        if let Some(cached) = self.cached(&Self::id_key(id)).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.cache(user).await;
        }

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        if self.email_taken_by_other(&user).await? {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<Option<User>, AppError> {
        if self.email_taken_by_other(&user).await? {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self.collection()
            .find_one_and_replace(doc! { "_id": &user.id }, &user)
            .with_options(options)
            .await
            .map_err(map_write_error)?;

        match previous {
            Some(previous) => {
                self.invalidate(&previous).await;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.collection()
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match deleted {
            Some(user) => {
                self.invalidate(&user).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
