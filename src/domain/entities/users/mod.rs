//! 사용자 엔티티

pub mod user;

pub use user::{Role, User};
