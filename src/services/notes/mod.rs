pub mod ownership_policy;
pub mod note_service;

pub use ownership_policy::{AccessDecision, NoteOwnershipPolicy};
pub use note_service::NoteService;
