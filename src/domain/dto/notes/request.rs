use serde::Deserialize;
use validator::Validate;

/// 노트 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[serde(alias = "Title")]
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: String,

    #[serde(default, alias = "Content")]
    #[validate(length(max = 100, message = "내용은 100자를 넘을 수 없습니다"))]
    pub content: String,
}

/// 노트 수정 요청
///
/// 빠진 필드는 빈 문자열로 덮어씁니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, alias = "Title")]
    pub title: String,

    #[serde(default, alias = "Content")]
    pub content: String,
}

/// `GET /api/notes/download/{id}?format=` 쿼리
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub format: String,
}
