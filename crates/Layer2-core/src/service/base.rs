//! ServiceCore - 서비스 구현을 위한 공통 상태 관리
//!
//! 상태 저장, 전이 검증, 준비 완료 콜백 호출을 담당합니다.
//! 서비스 구현체는 이 타입을 내장하고 `Service` 메서드를 위임하면 됩니다.

use super::state::ServiceState;
use super::traits::ReadyCallback;
use parking_lot::RwLock;
use servicehub_foundation::{Error, Result};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, trace};

pub struct ServiceCore {
    id: String,
    language_ids: Vec<String>,
    enabled: bool,
    state: AtomicU8,
    ready_callbacks: RwLock<Vec<ReadyCallback>>,
}

impl ServiceCore {
    pub fn new(id: impl Into<String>, language_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            language_ids,
            enabled: true,
            state: AtomicU8::new(ServiceState::Initial.as_raw()),
            ready_callbacks: RwLock::new(Vec::new()),
        }
    }

    /// 활성화 여부 설정
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn language_ids(&self) -> &[String] {
        &self.language_ids
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> ServiceState {
        ServiceState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// 상태 전이 - 이전 상태 반환
    ///
    /// `Running`으로 진입하면 등록된 준비 완료 콜백을 모두 호출합니다.
    pub fn transition(&self, next: ServiceState) -> Result<ServiceState> {
        let current = self.state();
        if !current.can_transition_to(next) {
            return Err(Error::invalid_transition(&self.id, current, next));
        }

        self.state
            .compare_exchange(
                current.as_raw(),
                next.as_raw(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|raw| {
                Error::invalid_transition(&self.id, ServiceState::from_raw(raw), next)
            })?;

        debug!(service = %self.id, from = %current, to = %next, "Service state changed");

        if next == ServiceState::Running {
            self.fire_ready();
        }

        Ok(current)
    }

    /// 준비 완료 콜백 등록
    pub fn add_ready_callback(&self, callback: ReadyCallback) {
        self.ready_callbacks.write().push(callback);
    }

    fn fire_ready(&self) {
        // 락을 잡은 채로 콜백을 호출하지 않음
        let callbacks: Vec<ReadyCallback> = self.ready_callbacks.read().clone();
        trace!(service = %self.id, count = callbacks.len(), "Firing ready callbacks");
        for callback in callbacks {
            callback(&self.id);
        }
    }
}

impl std::fmt::Debug for ServiceCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCore")
            .field("id", &self.id)
            .field("language_ids", &self.language_ids)
            .field("enabled", &self.enabled)
            .field("state", &self.state())
            .finish()
    }
}
