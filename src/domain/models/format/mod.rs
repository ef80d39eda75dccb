//! 노트 직렬화 포맷

pub mod note_format;

pub use note_format::NoteFormat;
