//! txt / json / xml 노트 인코더와 디코더
//!
//! 디코딩 규칙
//!
//! - 빈 페이로드는 포맷과 관계없이 빈 제목/내용이 됩니다.
//! - 앞에 붙은 UTF-8 BOM은 무시합니다.
//! - json/xml에서 모르는 필드는 무시하고, 빠지거나 `null`인 필드는 빈 문자열이 됩니다.
//! - 해석할 수 없는 페이로드는 `AppError::MalformedInput`입니다.

use chrono::Utc;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use crate::domain::models::format::NoteFormat;
use crate::errors::{AppError, ErrorContext};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const XML_ROOT: &str = "NoteDTO";

/// 다운로드 응답에 그대로 실을 수 있는 인코딩 결과
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedNote {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

#[derive(Serialize)]
#[serde(rename = "NoteDTO")]
struct OutgoingNote<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Content")]
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct IncomingNote {
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Content", default)]
    content: Option<String>,
}

impl IncomingNote {
    fn into_parts(self) -> (String, String) {
        (self.title.unwrap_or_default(), self.content.unwrap_or_default())
    }
}

/// 노트를 지정한 포맷의 파일로 인코딩합니다.
///
/// 파일 이름은 `{UTC 타임스탬프}.{확장자}` 형식이며 유일성은 보장하지 않습니다.
pub fn encode(format: NoteFormat, title: &str, content: &str) -> Result<EncodedNote, AppError> {
    let payload = OutgoingNote { title, content };

    let bytes = match format {
        NoteFormat::Txt => format!("{}\n{}", title, content).into_bytes(),
        NoteFormat::Json => serde_json::to_vec(&payload).context("JSON 인코딩 실패")?,
        NoteFormat::Xml => quick_xml::se::to_string(&payload).context("XML 인코딩 실패")?.into_bytes(),
    };

    Ok(EncodedNote {
        bytes,
        content_type: format.mime_type(),
        filename: export_filename(format),
    })
}

/// 페이로드를 `(title, content)`로 디코딩합니다.
pub fn decode(format: NoteFormat, bytes: &[u8]) -> Result<(String, String), AppError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if bytes.is_empty() {
        return Ok((String::new(), String::new()));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError::MalformedInput(format!("UTF-8 텍스트가 아닙니다: {}", e)))?;

    match format {
        NoteFormat::Txt => Ok(decode_txt(text)),
        NoteFormat::Json => decode_json(text),
        NoteFormat::Xml => decode_xml(text),
    }
}

fn export_filename(format: NoteFormat) -> String {
    format!("{}.{}", Utc::now().format("%Y%m%dT%H%M%SZ"), format.extension())
}

/// 첫 줄이 제목, 나머지 전체가 내용입니다.
///
/// 줄 끝은 `\n`, `\r\n`, 단독 `\r` 모두 인정합니다.
fn decode_txt(text: &str) -> (String, String) {
    match text.find(['\r', '\n']) {
        Some(line_end) => {
            let rest = &text[line_end..];
            let rest = rest
                .strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\r'))
                .or_else(|| rest.strip_prefix('\n'))
                .unwrap_or(rest);
            (text[..line_end].to_string(), rest.to_string())
        }
        None => (text.to_string(), String::new()),
    }
}

fn decode_json(text: &str) -> Result<(String, String), AppError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| AppError::MalformedInput(format!("JSON 형식이 아닙니다: {}", e)))?;

    if !value.is_object() {
        return Err(AppError::MalformedInput("JSON 객체가 아닙니다".to_string()));
    }

    let note: IncomingNote = serde_json::from_value(value)
        .map_err(|e| AppError::MalformedInput(format!("노트 JSON을 해석할 수 없습니다: {}", e)))?;

    Ok(note.into_parts())
}

#[derive(Debug, Clone, Copy)]
enum XmlField {
    Title,
    Content,
}

impl XmlField {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"Title" => Some(XmlField::Title),
            b"Content" => Some(XmlField::Content),
            _ => None,
        }
    }
}

impl IncomingNote {
    fn field_mut(&mut self, field: XmlField) -> &mut String {
        match field {
            XmlField::Title => self.title.get_or_insert_with(String::new),
            XmlField::Content => self.content.get_or_insert_with(String::new),
        }
    }
}

fn malformed_xml(error: impl std::fmt::Display) -> AppError {
    AppError::MalformedInput(format!("XML 형식이 아닙니다: {}", error))
}

/// `NoteDTO` 아래 `Title`/`Content`의 텍스트를 공백까지 그대로 읽습니다.
///
/// 더 깊이 중첩된 요소와 모르는 요소는 무시합니다.
fn decode_xml(text: &str) -> Result<(String, String), AppError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut note = IncomingNote::default();
    let mut depth = 0usize;
    let mut current: Option<XmlField> = None;

    loop {
        match reader.read_event().map_err(malformed_xml)? {
            Event::Start(element) => {
                if depth == 0 {
                    ensure_xml_root(element.name().as_ref())?;
                } else if depth == 1 {
                    current = XmlField::from_name(element.name().as_ref());
                    if let Some(field) = current {
                        note.field_mut(field).clear();
                    }
                }
                depth += 1;
            }
            Event::Empty(element) => {
                if depth == 0 {
                    ensure_xml_root(element.name().as_ref())?;
                    return Ok(note.into_parts());
                }
                if depth == 1 {
                    if let Some(field) = XmlField::from_name(element.name().as_ref()) {
                        note.field_mut(field).clear();
                    }
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    0 => return Ok(note.into_parts()),
                    1 => current = None,
                    _ => {}
                }
            }
            Event::Text(chunk) if depth == 2 => {
                if let Some(field) = current {
                    let unescaped = chunk.unescape().map_err(malformed_xml)?;
                    note.field_mut(field).push_str(&unescaped);
                }
            }
            Event::CData(chunk) if depth == 2 => {
                if let Some(field) = current {
                    let raw = chunk.into_inner();
                    let chunk = std::str::from_utf8(&raw).map_err(malformed_xml)?;
                    note.field_mut(field).push_str(chunk);
                }
            }
            Event::Eof => {
                return Err(AppError::MalformedInput(if depth == 0 {
                    "XML 루트 요소가 없습니다".to_string()
                } else {
                    format!("{} 요소가 닫히지 않았습니다", XML_ROOT)
                }));
            }
            _ => {}
        }
    }
}

fn ensure_xml_root(name: &[u8]) -> Result<(), AppError> {
    if name == XML_ROOT.as_bytes() {
        Ok(())
    } else {
        Err(AppError::MalformedInput(format!("루트 요소는 {} 이어야 합니다", XML_ROOT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_txt() {
        let encoded = encode(NoteFormat::Txt, "A", "B").unwrap();

        assert_eq!(encoded.bytes, b"A\nB");
        assert_eq!(encoded.content_type, "text/plain");
        assert!(encoded.filename.ends_with(".txt"));
    }

    #[test]
    fn test_encode_json() {
        let encoded = encode(NoteFormat::Json, "A", "B").unwrap();

        assert_eq!(encoded.bytes, br#"{"Title":"A","Content":"B"}"#);
        assert_eq!(encoded.content_type, "application/json");
        assert!(encoded.filename.ends_with(".json"));
    }

    #[test]
    fn test_encode_xml() {
        let encoded = encode(NoteFormat::Xml, "A", "B").unwrap();
        let xml = String::from_utf8(encoded.bytes).unwrap();

        assert_eq!(xml, "<NoteDTO><Title>A</Title><Content>B</Content></NoteDTO>");
        assert_eq!(encoded.content_type, "application/xml");
        assert!(encoded.filename.ends_with(".xml"));
    }

    #[test]
    fn test_filename_is_timestamp_and_extension() {
        let encoded = encode(NoteFormat::Json, "A", "B").unwrap();
        let (stem, ext) = encoded.filename.split_once('.').unwrap();

        assert_eq!(ext, "json");
        assert_eq!(stem.len(), "20240101T000000Z".len());
        assert!(stem.ends_with('Z'));
    }

    #[test]
    fn test_decode_txt_splits_first_line() {
        let (title, content) = decode(NoteFormat::Txt, b"Hello\nWorld").unwrap();
        assert_eq!((title.as_str(), content.as_str()), ("Hello", "World"));

        let (title, content) = decode(NoteFormat::Txt, b"Hello\r\nline 1\nline 2").unwrap();
        assert_eq!(title, "Hello");
        assert_eq!(content, "line 1\nline 2");
    }

    #[test]
    fn test_decode_txt_accepts_lone_carriage_return() {
        let (title, content) = decode(NoteFormat::Txt, b"T\rC\rD").unwrap();

        assert_eq!(title, "T");
        assert_eq!(content, "C\rD");
    }

    #[test]
    fn test_decode_xml_keeps_surrounding_whitespace() {
        let payload = b"<NoteDTO>\n  <Title> A </Title>\n  <Content>\n  body\n</Content>\n</NoteDTO>";

        let (title, content) = decode(NoteFormat::Xml, payload).unwrap();
        assert_eq!(title, " A ");
        assert_eq!(content, "\n  body\n");
    }

    #[test]
    fn test_decode_xml_reads_cdata_and_entities() {
        let payload = b"<NoteDTO><Title>a &amp; b</Title><Content><![CDATA[<raw> ]]></Content></NoteDTO>";

        let (title, content) = decode(NoteFormat::Xml, payload).unwrap();
        assert_eq!(title, "a & b");
        assert_eq!(content, "<raw> ");
    }

    #[test]
    fn test_decode_txt_single_line_and_bom() {
        let (title, content) = decode(NoteFormat::Txt, b"\xEF\xBB\xBFOnly title").unwrap();

        assert_eq!(title, "Only title");
        assert_eq!(content, "");
    }

    #[test]
    fn test_decode_txt_rejects_invalid_utf8() {
        let result = decode(NoteFormat::Txt, &[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn test_decode_json_tolerates_unknown_and_missing_fields() {
        let (title, content) =
            decode(NoteFormat::Json, br#"{"Title":"A","Extra":1}"#).unwrap();
        assert_eq!(title, "A");
        assert_eq!(content, "");

        let (title, content) =
            decode(NoteFormat::Json, br#"{"Title":null,"Content":"B"}"#).unwrap();
        assert_eq!(title, "");
        assert_eq!(content, "B");
    }

    #[test]
    fn test_decode_json_rejects_malformed() {
        assert!(matches!(
            decode(NoteFormat::Json, b"{not json"),
            Err(AppError::MalformedInput(_))
        ));
        assert!(matches!(
            decode(NoteFormat::Json, br#"["A","B"]"#),
            Err(AppError::MalformedInput(_))
        ));
        assert!(matches!(
            decode(NoteFormat::Json, br#"{"Title":5}"#),
            Err(AppError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_decode_xml_with_declaration_and_unknown_elements() {
        let payload = br#"<?xml version="1.0" encoding="utf-8"?>
<NoteDTO><Title>A</Title><Unknown>x</Unknown><Content>B</Content></NoteDTO>"#;

        let (title, content) = decode(NoteFormat::Xml, payload).unwrap();
        assert_eq!(title, "A");
        assert_eq!(content, "B");
    }

    #[test]
    fn test_decode_xml_missing_elements() {
        let (title, content) = decode(NoteFormat::Xml, b"<NoteDTO><Title>A</Title></NoteDTO>").unwrap();

        assert_eq!(title, "A");
        assert_eq!(content, "");
    }

    #[test]
    fn test_decode_xml_rejects_wrong_root_and_garbage() {
        assert!(matches!(
            decode(NoteFormat::Xml, b"<Note><Title>A</Title></Note>"),
            Err(AppError::MalformedInput(_))
        ));
        assert!(matches!(
            decode(NoteFormat::Xml, b"just some text"),
            Err(AppError::MalformedInput(_))
        ));
        assert!(matches!(
            decode(NoteFormat::Xml, b"<NoteDTO><Title>A</Title>"),
            Err(AppError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_decode_empty_payload_yields_empty_note() {
        for format in NoteFormat::ALL {
            let (title, content) = decode(format, b"").unwrap();
            assert_eq!(title, "");
            assert_eq!(content, "");
        }
    }

    #[test]
    fn test_round_trip_all_formats() {
        let cases = [
            ("Shopping", "milk & eggs <2>"),
            ("제목", "여러 줄\n내용"),
            ("quote \"here\"", "tab\there"),
            ("A", "line1\nline2\n"),
            ("A", "  indented"),
            ("  padded title ", "   "),
            ("A", ""),
        ];

        for format in NoteFormat::ALL {
            for (title, content) in cases {
                let encoded = encode(format, title, content).unwrap();
                let decoded = decode(format, &encoded.bytes).unwrap();
                assert_eq!(decoded, (title.to_string(), content.to_string()), "format {}", format);
            }
        }
    }
}
