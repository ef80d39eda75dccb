//! # Core Module
//!
//! 서비스 조립과 요청 간 공유 상태를 담당합니다.
//!
//! ### [`container`] - 서비스 조립
//! - **AppContainer**: 저장소 → 서비스 생성자 주입
//! - **configure**: actix `web::Data` 등록
//!
//! ```rust,ignore
//! let container = AppContainer::from_environment().await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| container.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::AppContainer;
