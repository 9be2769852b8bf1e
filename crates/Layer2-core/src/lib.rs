//! servicehub-core: 서비스 레지스트리 및 라이프사이클 컨트롤러
//!
//! Layer2 - 서비스 관리 레이어
//!
//! # 주요 모듈
//!
//! - `service`: `Service` 트레이트, 상태 머신, `ServiceCore`, `ProcessService`
//! - `registry`: 서비스 ID → 인스턴스 매핑 + 언어 ID 인덱스
//! - `router`: 언어 ID → 서비스 목록
//! - `controller`: start/stop/toggle/dispose, 상태 보고
//! - `discovery`: 정적 주입 / `service.json` 매니페스트 발견
//! - `language`: 파일 확장자 → 언어 ID
//!
//! # 사용 예시
//!
//! ```ignore
//! use servicehub_core::{ManifestDiscovery, ServiceController};
//! use servicehub_foundation::NotificationCenter;
//!
//! let center = Arc::new(NotificationCenter::new());
//! let controller = Arc::new(ServiceController::new(center.clone()));
//!
//! // 서비스 발견 및 등록
//! controller.load(&ManifestDiscovery::new(&working_dir)).await;
//!
//! // go 파일이 열리면 해당 서비스 시작
//! let handles = controller.start("go");
//!
//! // 상태 보고
//! for stat in controller.service_stats() {
//!     println!("{} {}", stat.id, stat.state);
//! }
//!
//! controller.dispose();
//! ```

pub mod controller;
pub mod discovery;
pub mod language;
pub mod registry;
pub mod router;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports: Service
pub use service::{ProcessService, ReadyCallback, Service, ServiceCore, ServiceState};

// Re-exports: Registry / Router
pub use registry::{LanguageIndex, ServiceRegistry};
pub use router::{ResolveMode, ServiceRouter};

// Re-exports: Controller
pub use controller::{ControllerConfig, ServiceController, ServiceStat, NOTIFICATION_SOURCE};

// Re-exports: Discovery
pub use discovery::{
    DiscoveryFailure, DiscoveryReport, ManifestDiscovery, ManifestScope, ProcessServiceProvider,
    ServiceDiscovery, ServiceProvider, StaticDiscovery, SERVICE_MANIFEST_FILE,
};

// Re-exports: Language
pub use language::detect_language;
