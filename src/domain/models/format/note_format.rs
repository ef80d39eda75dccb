use std::fmt;
use std::str::FromStr;
use crate::errors::AppError;

/// 노트를 주고받는 파일 포맷
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFormat {
    Txt,
    Json,
    Xml,
}

impl NoteFormat {
    pub const ALL: [NoteFormat; 3] = [NoteFormat::Txt, NoteFormat::Json, NoteFormat::Xml];

    /// 파일 확장자 (점 제외)
    pub fn extension(&self) -> &'static str {
        match self {
            NoteFormat::Txt => "txt",
            NoteFormat::Json => "json",
            NoteFormat::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            NoteFormat::Txt => "text/plain",
            NoteFormat::Json => "application/json",
            NoteFormat::Xml => "application/xml",
        }
    }

    /// 업로드 파일 확장자에서 포맷을 고릅니다.
    ///
    /// 앞의 점은 있어도 되고 대소문자는 구분하지 않습니다.
    pub fn from_extension(extension: &str) -> Result<Self, AppError> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        normalized.parse()
    }
}

/// 다운로드 쿼리의 `format` 값은 소문자 그대로만 받습니다.
impl FromStr for NoteFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(NoteFormat::Txt),
            "json" => Ok(NoteFormat::Json),
            "xml" => Ok(NoteFormat::Xml),
            other => Err(AppError::UnsupportedFormat(format!(
                "'{}' 포맷은 지원하지 않습니다 (txt, json, xml)",
                other
            ))),
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
