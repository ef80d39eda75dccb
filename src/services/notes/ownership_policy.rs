//! 노트 소유권 정책
//!
//! 노트는 소유자만 보고 수정할 수 있습니다.

use crate::domain::entities::notes::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

pub struct NoteOwnershipPolicy;

impl NoteOwnershipPolicy {
    /// 요청자가 노트 소유자일 때만 `Granted`
    pub fn authorize(note: &Note, requesting_user_id: &str) -> AccessDecision {
        if note.is_owned_by(requesting_user_id) {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::notes::NewNote;

    #[test]
    fn test_owner_is_granted() {
        let note = NewNote::new("u1", "A", "B").with_id(1);
        assert_eq!(NoteOwnershipPolicy::authorize(&note, "u1"), AccessDecision::Granted);
    }

    #[test]
    fn test_other_users_are_denied() {
        let note = NewNote::new("u1", "A", "B").with_id(1);

        for other in ["u2", "", "U1", "u1 "] {
            assert_eq!(NoteOwnershipPolicy::authorize(&note, other), AccessDecision::Denied);
        }
    }
}
