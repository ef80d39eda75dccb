//! 노트 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CreateNoteRequest, DownloadQuery, UpdateNoteRequest};
pub use response::NoteResponse;
