use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::notes::Note;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub note_id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            note_id: note.id,
            user_id: note.user_id,
            title: note.title,
            content: note.content,
            creation_date: note.creation_date,
            modified_date: note.modified_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::notes::NewNote;

    #[test]
    fn test_note_response_uses_camel_case() {
        let note = NewNote::new("u1", "A", "B").with_id(5);
        let json = serde_json::to_value(NoteResponse::from(note)).unwrap();

        assert_eq!(json["noteId"], 5);
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["title"], "A");
        assert_eq!(json["content"], "B");
        assert!(json.get("creationDate").is_some());
        assert!(json.get("modifiedDate").is_some());
    }
}
