pub mod note_repo;
pub mod in_memory_note_repo;
pub mod mongo_note_repo;

pub use note_repo::{NoteChanges, NoteRepository};
pub use in_memory_note_repo::InMemoryNoteRepository;
pub use mongo_note_repo::MongoNoteRepository;
