//! Note HTTP Handlers
//!
//! `/api/notes` 스코프의 핸들러입니다. 모든 엔드포인트는 `AuthMiddleware::required()` 뒤에 있으며,
//! 토큰의 사용자를 `UserService::resolve_current_user`로 다시 확인한 뒤 노트 서비스를 호출합니다.
//!
//! | Method | Path | 성공 |
//! |--------|------|------|
//! | GET | `/api/notes` | 200 노트 목록 |
//! | POST | `/api/notes` | 201 생성된 노트 |
//! | POST | `/api/notes/upload` | 201 가져온 노트 |
//! | GET | `/api/notes/download/{id}?format=` | 200 첨부 파일 |
//! | PUT | `/api/notes/{id}` | 200 수정된 노트 |
//! | DELETE | `/api/notes/{id}` | 204 |

use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{delete, get, post, put, web, HttpResponse};
use futures_util::StreamExt;
use validator::Validate;
use crate::config::UploadConfig;
use crate::domain::dto::notes::{CreateNoteRequest, DownloadQuery, UpdateNoteRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::format::NoteFormat;
use crate::errors::AppError;
use crate::services::notes::NoteService;
use crate::services::users::UserService;
use crate::utils::string_utils::file_extension;

/// 현재 사용자의 노트 목록
///
/// # Endpoint
/// `GET /api/notes`
#[get("")]
pub async fn get_notes(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.resolve_current_user(&auth).await?;
    let notes = note_service.get_user_notes(&user.id).await?;

    Ok(HttpResponse::Ok().json(notes))
}

/// 노트 생성
///
/// # Endpoint
/// `POST /api/notes`
#[post("")]
pub async fn create_note(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
    payload: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service.resolve_current_user(&auth).await?;
    let CreateNoteRequest { title, content } = payload.into_inner();
    let note = note_service.create_note(&user.id, title, content).await?;

    Ok(HttpResponse::Created().json(note))
}

/// 파일 업로드로 노트 가져오기
///
/// 파일 이름이 있는 첫 번째 필드를 사용하고, 확장자로 포맷을 고릅니다.
///
/// # Endpoint
/// `POST /api/notes/upload` (multipart/form-data)
#[post("/upload")]
pub async fn upload_note(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let user = user_service.resolve_current_user(&auth).await?;

    let (filename, bytes) = read_first_file(&mut payload, UploadConfig::max_upload_bytes()).await?;
    let extension = file_extension(&filename)
        .ok_or_else(|| AppError::UnsupportedFormat(format!("확장자가 없는 파일입니다: {}", filename)))?;

    let note = note_service.import_note(&user.id, &bytes, extension).await?;

    Ok(HttpResponse::Created().json(note))
}

/// 노트를 파일로 내려받기
///
/// # Endpoint
/// `GET /api/notes/download/{id}?format=txt|json|xml`
#[get("/download/{id}")]
pub async fn download_note(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
    path: web::Path<i64>,
    query: web::Query<DownloadQuery>,
) -> Result<HttpResponse, AppError> {
    let format: NoteFormat = query.format.parse()?;
    let user = user_service.resolve_current_user(&auth).await?;

    let encoded = note_service.export_note(path.into_inner(), &user.id, format).await?;

    Ok(HttpResponse::Ok()
        .content_type(encoded.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(encoded.filename)],
        })
        .body(encoded.bytes))
}

/// 노트 수정
///
/// # Endpoint
/// `PUT /api/notes/{id}`
#[put("/{id}")]
pub async fn update_note(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.resolve_current_user(&auth).await?;
    let UpdateNoteRequest { title, content } = payload.into_inner();

    let note = note_service.update_note(path.into_inner(), title, content, &user.id).await?;

    Ok(HttpResponse::Ok().json(note))
}

/// 노트 삭제
///
/// # Endpoint
/// `DELETE /api/notes/{id}`
#[delete("/{id}")]
pub async fn delete_note(
    auth: AuthenticatedUser,
    user_service: web::Data<UserService>,
    note_service: web::Data<NoteService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.resolve_current_user(&auth).await?;
    note_service.delete_note(path.into_inner(), &user.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 파일 이름이 있는 첫 번째 필드를 끝까지 읽습니다.
///
/// 파일 이름이 없는 필드는 건너뜁니다.
async fn read_first_file(payload: &mut Multipart, max_bytes: usize) -> Result<(String, Vec<u8>), AppError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::MalformedInput(format!("업로드 처리 실패: {}", e)))?;

        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        let mut file_data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| AppError::MalformedInput(format!("업로드 데이터 읽기 실패: {}", e)))?;

            if filename.is_some() {
                if file_data.len() + data.len() > max_bytes {
                    return Err(AppError::ValidationError(format!(
                        "업로드 파일은 {} bytes를 넘을 수 없습니다", max_bytes
                    )));
                }
                file_data.extend_from_slice(&data);
            }
        }

        if let Some(filename) = filename {
            return Ok((filename, file_data));
        }
    }

    Err(AppError::ValidationError("업로드할 파일이 없습니다".to_string()))
}
