//! Note Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 저장된 노트
///
/// `id`는 저장소가 발급하는 단조 증가 정수입니다.
/// `user_id`와 `creation_date`는 생성 이후 바뀌지 않으며
/// `modified_date >= creation_date`가 항상 성립합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// 아직 식별자가 없는 노트
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl NewNote {
    /// 생성/수정 시각을 같은 현재 시각으로 찍습니다.
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            user_id: user_id.into(),
            title: title.into(),
            content: content.into(),
            creation_date: now,
            modified_date: now,
        }
    }

    /// 저장소가 발급한 식별자를 붙여 [`Note`]로 만듭니다.
    pub fn with_id(self, id: i64) -> Note {
        Note {
            id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            creation_date: self.creation_date,
            modified_date: self.modified_date,
        }
    }
}

impl Note {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
