//! Service Router - 언어 ID로 서비스 선택

use crate::registry::ServiceRegistry;
use crate::service::Service;
use servicehub_foundation::{Notification, NotificationSink};
use std::sync::Arc;
use tracing::debug;

/// 알 수 없는 언어에 대한 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// 경고 알림 1회 발생
    #[default]
    Warn,
    /// 조용히 None 반환
    Quiet,
}

/// 서비스 라우터
pub struct ServiceRouter {
    registry: Arc<ServiceRegistry>,
    sink: Arc<dyn NotificationSink>,
}

impl ServiceRouter {
    pub fn new(registry: Arc<ServiceRegistry>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { registry, sink }
    }

    /// 언어 ID에 해당하는 서비스 목록
    ///
    /// - 빈 언어 ID → `Some(vec![])`
    /// - 인덱스에 없는 언어 → `None` (`Warn` 모드에서는 경고 1회)
    /// - 그 외 → 지원하는 모든 서비스 (상태 무관, 등록 순서)
    pub fn resolve(&self, language_id: &str, mode: ResolveMode) -> Option<Vec<Arc<dyn Service>>> {
        if language_id.is_empty() {
            return Some(Vec::new());
        }

        if !self.registry.has_language(language_id) {
            debug!(language = %language_id, "No service registered for language");
            if mode == ResolveMode::Warn {
                self.sink.notify(
                    Notification::warning(format!(
                        "No service supports language '{}'",
                        language_id
                    ))
                    .with_source("router"),
                );
            }
            return None;
        }

        Some(self.registry.supporting(language_id))
    }
}
