//! # Note Codec Module
//!
//! 노트의 제목/내용을 파일 페이로드로 바꾸거나 페이로드에서 되살립니다.
//!
//! | 포맷 | 인코딩 결과 | MIME |
//! |------|-------------|------|
//! | `txt` | `"{title}\n{content}"` | `text/plain` |
//! | `json` | `{"Title": ..., "Content": ...}` | `application/json` |
//! | `xml` | `<NoteDTO><Title/><Content/></NoteDTO>` | `application/xml` |
//!
//! ```rust,ignore
//! use crate::codec::note_codec;
//! use crate::domain::NoteFormat;
//!
//! let encoded = note_codec::encode(NoteFormat::Json, "A", "B")?;
//! assert_eq!(encoded.bytes, br#"{"Title":"A","Content":"B"}"#);
//!
//! let (title, content) = note_codec::decode(NoteFormat::Txt, b"Hello\nWorld")?;
//! ```

pub mod note_codec;

pub use note_codec::{decode, encode, EncodedNote};
