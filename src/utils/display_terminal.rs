//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 배너와 접속 정보를 출력합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Note Backend                    ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{}╗\n║{:^width$}║\n╚{}╝", border, title, border, width = BOX_WIDTH)
}

/// 바인딩 주소와 저장소 종류를 출력합니다
pub fn print_startup_summary(host: &str, port: u16, storage: &str) {
    for line in startup_summary(host, port, storage) {
        println!("{}", line);
    }
}

fn startup_summary(host: &str, port: u16, storage: &str) -> Vec<String> {
    vec![
        format!("  🌐 http://{}:{}", host, port),
        format!("  📍 Health check: http://{}:{}/health", host, port),
        format!("  💾 Storage: {}", storage),
    ]
}
