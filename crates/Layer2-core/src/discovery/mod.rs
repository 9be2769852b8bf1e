//! Service Discovery - 서비스 발견 및 로드
//!
//! 컨트롤러는 발견 과정을 모르고 `ServiceDiscovery`가 돌려주는
//! 프로바이더 목록만 사용합니다.
//!
//! - `StaticDiscovery`: 미리 생성된 서비스 인스턴스 주입
//! - `ManifestDiscovery`: `service.json` 매니페스트 스캔 + 설정 인라인 매니페스트

mod instance;
mod manifest;
mod traits;

pub use instance::StaticDiscovery;
pub use manifest::{ManifestDiscovery, ManifestScope, ProcessServiceProvider, SERVICE_MANIFEST_FILE};
pub use traits::{DiscoveryFailure, DiscoveryReport, ServiceDiscovery, ServiceProvider};
