//! 노트 엔티티

pub mod note;

pub use note::{NewNote, Note};
