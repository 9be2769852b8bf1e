//! 테스트용 서비스 / 알림 싱크

use crate::service::{ReadyCallback, Service, ServiceCore, ServiceState};
use async_trait::async_trait;
use parking_lot::Mutex;
use servicehub_foundation::{Error, Notification, NotificationSink, Result, Severity};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// 호출 횟수를 기록하는 모의 서비스
pub(crate) struct MockService {
    core: ServiceCore,
    pub init_calls: AtomicUsize,
    pub stop_calls: AtomicUsize,
    pub restart_calls: AtomicUsize,
    pub dispose_calls: AtomicUsize,
    fail_init: bool,
    fail_dispose: bool,
    gate: Option<Arc<Notify>>,
    stop_gate: Option<Arc<Notify>>,
}

impl MockService {
    pub fn new(id: &str, language_ids: &[&str]) -> Self {
        Self {
            core: ServiceCore::new(id, language_ids.iter().map(|l| l.to_string()).collect()),
            init_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
            restart_calls: AtomicUsize::new(0),
            dispose_calls: AtomicUsize::new(0),
            fail_init: false,
            fail_dispose: false,
            gate: None,
            stop_gate: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.core = self.core.with_enabled(false);
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_dispose(mut self) -> Self {
        self.fail_dispose = true;
        self
    }

    /// `Starting`에서 gate가 열릴 때까지 대기
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// `Stopping`에서 gate가 열릴 때까지 대기
    pub fn gated_stop(mut self, gate: Arc<Notify>) -> Self {
        self.stop_gate = Some(gate);
        self
    }

    pub fn init_count(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    pub fn restart_count(&self) -> usize {
        self.restart_calls.load(Ordering::SeqCst)
    }

    pub fn dispose_count(&self) -> usize {
        self.dispose_calls.load(Ordering::SeqCst)
    }

    async fn launch(&self) -> Result<()> {
        self.core.transition(ServiceState::Starting)?;
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_init {
            self.core.transition(ServiceState::StartFailed)?;
            return Err(Error::transition(self.core.id(), "mock init failure"));
        }
        self.core.transition(ServiceState::Running)?;
        Ok(())
    }
}

#[async_trait]
impl Service for MockService {
    fn id(&self) -> &str {
        self.core.id()
    }

    fn language_ids(&self) -> &[String] {
        self.core.language_ids()
    }

    fn enabled(&self) -> bool {
        self.core.enabled()
    }

    fn state(&self) -> ServiceState {
        self.core.state()
    }

    async fn init(&self) -> Result<()> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        self.launch().await
    }

    async fn stop(&self) -> Result<()> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.core.transition(ServiceState::Stopping)?;
        if let Some(gate) = &self.stop_gate {
            gate.notified().await;
        }
        self.core.transition(ServiceState::Stopped)?;
        Ok(())
    }

    async fn restart(&self) -> Result<()> {
        self.restart_calls.fetch_add(1, Ordering::SeqCst);
        if self.core.state() == ServiceState::Running {
            self.core.transition(ServiceState::Stopping)?;
            self.core.transition(ServiceState::Stopped)?;
        }
        self.launch().await
    }

    fn dispose(&self) -> Result<()> {
        self.dispose_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_dispose {
            return Err(Error::dispose(self.core.id(), "mock dispose failure"));
        }
        Ok(())
    }

    fn on_ready(&self, callback: ReadyCallback) {
        self.core.add_ready_callback(callback);
    }
}

/// 받은 알림을 그대로 보관하는 싱크
#[derive(Default)]
pub(crate) struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn all(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.received
            .lock()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }

    pub fn messages(&self) -> Vec<String> {
        self.received.lock().iter().map(|n| n.message.clone()).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}
