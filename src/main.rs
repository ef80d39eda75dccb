//! 노트 백엔드 메인 애플리케이션
//!
//! 설정을 읽어 저장소와 서비스를 조립하고 Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use noteapp_backend::config::{AdminSeedConfig, ServerConfig};
use noteapp_backend::core::AppContainer;
use noteapp_backend::routes::configure_all_routes;
use noteapp_backend::utils::display_terminal::{print_boxed_title, print_startup_summary};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 노트 백엔드 시작중...");

    let container = AppContainer::from_environment()
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    seed_admin(&container).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(container).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(container: AppContainer) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();
    let workers = ServerConfig::workers();
    let allowed_origins = ServerConfig::cors_allowed_origins();

    print_boxed_title("Note Backend");
    print_startup_summary(&host, port, container.storage_backend.as_str());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다 (workers: {})", host, port, workers);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| container.configure(cfg))
            .configure(configure_all_routes)
    })
        .bind((host.as_str(), port))?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug"를 사용합니다.
///
/// ```bash
/// RUST_LOG=noteapp_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 관리자 계정을 만듭니다. 실패해도 서버는 계속 시작합니다.
async fn seed_admin(container: &AppContainer) {
    let email = AdminSeedConfig::email();

    match container.user_service.seed_admin(&email, &AdminSeedConfig::password()).await {
        Ok(true) => info!("👤 관리자 계정 생성: {}", email),
        Ok(false) => info!("👤 관리자 계정 확인: {}", email),
        Err(e) => error!("관리자 계정 생성 실패: {}", e),
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .supports_credentials()
        .max_age(3600)
}
