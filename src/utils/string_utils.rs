//! 문자열 처리 유틸리티
//!
//! 이메일 정규화와 업로드 파일 이름 처리에 쓰는 함수들입니다.

/// 대소문자 구분 없는 비교를 위해 이메일을 정규화합니다.
///
/// 앞뒤 공백을 제거하고 소문자로 바꿉니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 파일 이름에서 확장자를 꺼냅니다 (점 제외).
///
/// 경로 구분자가 섞여 있어도 마지막 구성 요소만 봅니다.
/// `.bashrc`처럼 점으로 시작하는 이름은 확장자가 없는 것으로 봅니다.
pub fn file_extension(filename: &str) -> Option<&str> {
    let name = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx + 1 < name.len() => Some(&name[idx + 1..]),
        Some(_) => None,
    }
}
