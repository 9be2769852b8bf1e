//! Service Controller - 서비스 라이프사이클 관리
//!
//! 호스트 세션 당 하나만 생성해 `Arc`로 공유합니다.
//! 모든 연산은 실패를 호출자에게 돌려주지 않고 `NotificationSink`로 보고합니다.

use crate::discovery::ServiceDiscovery;
use crate::language::detect_language;
use crate::registry::ServiceRegistry;
use crate::router::{ResolveMode, ServiceRouter};
use crate::service::{Service, ServiceState};
use parking_lot::Mutex;
use serde::Serialize;
use servicehub_foundation::{Error, HubConfig, Notification, NotificationSink, Severity};
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// 컨트롤러가 보내는 알림의 source
pub const NOTIFICATION_SOURCE: &str = "controller";

fn notify(sink: &dyn NotificationSink, severity: Severity, message: String) {
    sink.notify(Notification::new(message, severity).with_source(NOTIFICATION_SOURCE));
}

// ============================================================================
// 설정
// ============================================================================

/// 컨트롤러 설정
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// `start`에서 알 수 없는 언어에 경고 알림
    pub warn_unknown_language: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            warn_unknown_language: true,
        }
    }
}

impl ControllerConfig {
    pub fn from_hub(config: &HubConfig) -> Self {
        Self {
            warn_unknown_language: config.warn_unknown_language(),
        }
    }
}

// ============================================================================
// 상태 스냅샷
// ============================================================================

/// 서비스 상태 스냅샷 (상태 보고용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStat {
    pub id: String,

    /// 정규 상태 라벨 (`init`, `running`, ...)
    pub state: String,

    pub language_ids: Vec<String>,
}

// ============================================================================
// ServiceController
// ============================================================================

/// 서비스 컨트롤러
pub struct ServiceController {
    registry: Arc<ServiceRegistry>,

    router: ServiceRouter,

    sink: Arc<dyn NotificationSink>,

    config: ControllerConfig,

    /// `start`가 띄운 init 작업이 진행 중인 서비스 ID
    in_flight: Arc<Mutex<HashSet<String>>>,

    disposed: AtomicBool,
}

impl ServiceController {
    /// 기본 설정으로 생성
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_config(sink, ControllerConfig::default())
    }

    /// 설정으로 생성
    pub fn with_config(sink: Arc<dyn NotificationSink>, config: ControllerConfig) -> Self {
        let registry = Arc::new(ServiceRegistry::new());
        Self {
            router: ServiceRouter::new(Arc::clone(&registry), Arc::clone(&sink)),
            registry,
            sink,
            config,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            disposed: AtomicBool::new(false),
        }
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 서비스 등록
    ///
    /// 비활성화된 서비스는 무시하고, 중복/잘못된 ID는 에러 알림으로 보고합니다.
    /// 등록에 성공하면 준비 완료 시마다 정보 알림을 보내도록 구독합니다.
    pub fn register(&self, service: Arc<dyn Service>) {
        match self.registry.register(Arc::clone(&service)) {
            Ok(true) => {
                let sink = Arc::clone(&self.sink);
                service.on_ready(Arc::new(move |id: &str| {
                    notify(sink.as_ref(), Severity::Info, format!("Service {} started", id));
                }));
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Service registration rejected: {}", e);
                notify(self.sink.as_ref(), Severity::Error, e.to_string());
            }
        }
    }

    /// 여러 서비스 등록 (순서 유지)
    pub fn register_all(&self, services: impl IntoIterator<Item = Arc<dyn Service>>) {
        for service in services {
            self.register(service);
        }
    }

    /// 발견 소스에서 서비스 로드 - 등록된 서비스 수 반환
    ///
    /// 발견 실패와 생성 실패는 보고만 하고 나머지는 계속 등록합니다.
    pub async fn load(&self, discovery: &dyn ServiceDiscovery) -> usize {
        let before = self.registry.len();
        let report = discovery.discover().await;

        for failure in &report.failures {
            error!(source = %discovery.name(), "Service discovery failed: {}", failure);
            notify(
                self.sink.as_ref(),
                Severity::Error,
                format!("Service discovery failed: {}", failure),
            );
        }

        for provider in &report.providers {
            match provider.create() {
                Ok(service) => self.register(service),
                Err(e) => {
                    error!(provider = %provider.name(), "Failed to create service: {}", e);
                    notify(
                        self.sink.as_ref(),
                        Severity::Error,
                        format!("Failed to create service {}: {}", provider.name(), e),
                    );
                }
            }
        }

        let loaded = self.registry.len() - before;
        info!(source = %discovery.name(), loaded, "Loaded services");
        loaded
    }

    // ========================================================================
    // 라이프사이클
    // ========================================================================

    /// 언어 ID에 해당하는 `Initial` 서비스들을 백그라운드로 시작
    ///
    /// 각 init은 독립된 tokio 태스크로 실행되며 완료를 기다리지 않습니다.
    /// 이미 시작된 서비스(및 init이 진행 중인 서비스)는 건드리지 않습니다.
    pub fn start(&self, language_id: &str) -> Vec<JoinHandle<()>> {
        let Some(services) = self.router.resolve(language_id, self.resolve_mode()) else {
            return Vec::new();
        };

        services
            .into_iter()
            .filter_map(|service| self.spawn_init(service))
            .collect()
    }

    /// ID로 단일 서비스 시작 (`Initial`일 때만)
    pub fn start_by_id(&self, id: &str) -> Option<JoinHandle<()>> {
        let service = self.lookup(id)?;

        let handle = self.spawn_init(service);
        if handle.is_none() {
            debug!(service = %id, "Service already started");
        }
        handle
    }

    /// 파일 경로의 언어로 서비스 시작
    pub fn activate_file(&self, path: &Path) -> Vec<JoinHandle<()>> {
        match detect_language(path) {
            Some(language_id) => {
                debug!(language = language_id, "Activating services for {:?}", path);
                self.start(language_id)
            }
            None => {
                debug!("No language detected for {:?}", path);
                Vec::new()
            }
        }
    }

    /// 서비스 중지 - 완료까지 대기
    pub async fn stop(&self, id: &str) {
        let Some(service) = self.lookup(id) else {
            return;
        };

        if let Err(e) = service.stop().await {
            self.report_failure("stop", id, &e);
        }
    }

    /// 서비스 토글
    ///
    /// - `Running` → stop
    /// - `Initial` → init
    /// - `Stopped` → restart
    /// - 그 외 상태 → 아무 것도 하지 않음
    pub async fn toggle(&self, id: &str) {
        let Some(service) = self.lookup(id) else {
            return;
        };

        let state = service.state();
        let (action, result) = match state {
            ServiceState::Running => ("stop", service.stop().await),
            ServiceState::Initial => ("start", service.init().await),
            ServiceState::Stopped => ("restart", service.restart().await),
            other => {
                debug!(
                    service = %id,
                    state = %other,
                    transitioning = other.is_transitioning(),
                    "Toggle ignored"
                );
                return;
            }
        };

        if let Err(e) = result {
            self.report_failure(action, id, &e);
        }
    }

    /// 모든 서비스 dispose (첫 호출에서만 수행)
    ///
    /// 한 서비스의 실패가 나머지를 막지 않습니다. 엔트리는 제거되지 않습니다.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            debug!("Services already disposed");
            return;
        }

        let services = self.registry.list();
        info!(count = services.len(), "Disposing services");

        for service in services {
            if let Err(e) = service.dispose() {
                self.report_failure("dispose", service.id(), &e);
            }
        }
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 상태 스냅샷 (등록 순서)
    pub fn service_stats(&self) -> Vec<ServiceStat> {
        self.registry
            .list()
            .iter()
            .map(|service| ServiceStat {
                id: service.id().to_string(),
                state: service.state().label().to_string(),
                language_ids: service.language_ids().to_vec(),
            })
            .collect()
    }

    /// ID로 서비스 조회
    pub fn get_service(&self, id: &str) -> Option<Arc<dyn Service>> {
        self.registry.get(id)
    }

    /// 언어 ID로 서비스 조회 (알림 없음)
    pub fn get_services(&self, language_id: &str) -> Vec<Arc<dyn Service>> {
        self.router
            .resolve(language_id, ResolveMode::Quiet)
            .unwrap_or_default()
    }

    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    // ========================================================================
    // 내부 헬퍼
    // ========================================================================

    fn resolve_mode(&self) -> ResolveMode {
        if self.config.warn_unknown_language {
            ResolveMode::Warn
        } else {
            ResolveMode::Quiet
        }
    }

    /// ID 조회 - 없으면 경고 알림
    fn lookup(&self, id: &str) -> Option<Arc<dyn Service>> {
        let service = self.registry.get(id);
        if service.is_none() {
            debug!(service = %id, "Service lookup failed");
            notify(
                self.sink.as_ref(),
                Severity::Warning,
                Error::ServiceNotFound(id.to_string()).to_string(),
            );
        }
        service
    }

    /// `Initial` 서비스의 init을 현재 tokio 런타임의 태스크로 실행
    ///
    /// 런타임 밖에서 호출되면 태스크를 띄우지 않고 에러 알림만 보냅니다.
    fn spawn_init(&self, service: Arc<dyn Service>) -> Option<JoinHandle<()>> {
        if service.state() != ServiceState::Initial {
            return None;
        }

        let id = service.id().to_string();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(service = %id, "Cannot spawn service init: {}", e);
                notify(
                    self.sink.as_ref(),
                    Severity::Error,
                    format!("Failed to start service {}: no async runtime ({})", id, e),
                );
                return None;
            }
        };

        if !self.in_flight.lock().insert(id.clone()) {
            return None;
        }

        debug!(service = %id, "Spawning service init");
        let sink = Arc::clone(&self.sink);
        let in_flight = Arc::clone(&self.in_flight);

        Some(runtime.spawn(async move {
            let result = service.init().await;
            in_flight.lock().remove(&id);

            if let Err(e) = result {
                error!(service = %id, "Service failed to start: {}", e);
                notify(
                    sink.as_ref(),
                    Severity::Error,
                    format!("Failed to start service {}: {}", id, e),
                );
            }
        }))
    }

    fn report_failure(&self, action: &str, id: &str, err: &Error) {
        error!(service = %id, action, "Service operation failed: {}", err);
        notify(
            self.sink.as_ref(),
            Severity::Error,
            format!("Failed to {} service {}: {}", action, id, err),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{DiscoveryReport, ServiceProvider, StaticDiscovery};
    use crate::test_support::{MockService, RecordingSink};
    use async_trait::async_trait;
    use servicehub_foundation::{Result, Severity};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn controller() -> (ServiceController, Arc<RecordingSink>) {
        let sink = RecordingSink::new();
        (ServiceController::new(sink.clone()), sink)
    }

    async fn join(handles: Vec<JoinHandle<()>>) {
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[test]
    fn test_duplicate_registration_is_reported() {
        let (controller, sink) = controller();
        let first = Arc::new(MockService::new("a", &["go"]));
        let first_dyn: Arc<dyn Service> = first.clone();

        controller.register(first_dyn.clone());
        controller.register(Arc::new(MockService::new("a", &["rust"])));

        assert!(Arc::ptr_eq(&controller.get_service("a").unwrap(), &first_dyn));
        assert!(controller.get_services("rust").is_empty());
        assert_eq!(sink.count(Severity::Error), 1);
        assert!(sink.messages()[0].contains("already registered"));
    }

    #[test]
    fn test_disabled_service_not_listed() {
        let (controller, sink) = controller();
        controller.register(Arc::new(MockService::new("a", &["go"]).disabled()));

        assert!(controller.service_stats().is_empty());
        assert!(!controller.registry().has_language("go"));
        assert!(sink.all().is_empty());
    }

    #[test]
    fn test_empty_id_is_reported() {
        let (controller, sink) = controller();
        controller.register(Arc::new(MockService::new("", &["go"])));

        assert!(controller.service_stats().is_empty());
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[tokio::test]
    async fn test_start_initializes_matching_services() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        let b = Arc::new(MockService::new("b", &["go", "rust"]));
        controller.register(a.clone());
        controller.register(b.clone());

        join(controller.start("rust")).await;

        assert_eq!(a.init_count(), 0);
        assert_eq!(b.init_count(), 1);
        assert_eq!(b.state(), ServiceState::Running);
        assert_eq!(sink.messages(), vec!["Service b started".to_string()]);
        assert_eq!(sink.count(Severity::Info), 1);
    }

    #[tokio::test]
    async fn test_start_skips_started_services() {
        let (controller, _sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());

        join(controller.start("go")).await;
        assert!(controller.start("go").is_empty());
        assert_eq!(a.init_count(), 1);
    }

    #[tokio::test]
    async fn test_start_twice_before_init_runs() {
        let (controller, _sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());

        let mut handles = controller.start("go");
        handles.extend(controller.start("go"));
        assert_eq!(handles.len(), 1);

        join(handles).await;
        assert_eq!(a.init_count(), 1);
    }

    #[tokio::test]
    async fn test_start_failure_is_reported() {
        let (controller, sink) = controller();
        let bad = Arc::new(MockService::new("bad", &["go"]).failing_init());
        let good = Arc::new(MockService::new("good", &["go"]));
        controller.register(bad.clone());
        controller.register(good.clone());

        join(controller.start("go")).await;

        assert_eq!(bad.state(), ServiceState::StartFailed);
        assert_eq!(good.state(), ServiceState::Running);
        assert_eq!(sink.count(Severity::Error), 1);
        assert!(sink
            .messages()
            .iter()
            .any(|m| m.starts_with("Failed to start service bad")));
    }

    #[tokio::test]
    async fn test_start_unknown_language() {
        let (controller, sink) = controller();
        controller.register(Arc::new(MockService::new("a", &["go"])));

        assert!(controller.start("python").is_empty());
        assert_eq!(sink.count(Severity::Warning), 1);

        assert!(controller.start("").is_empty());
        assert_eq!(sink.all().len(), 1);
    }

    #[tokio::test]
    async fn test_start_unknown_language_quiet() {
        let sink = RecordingSink::new();
        let controller = ServiceController::with_config(
            sink.clone(),
            ControllerConfig {
                warn_unknown_language: false,
            },
        );

        assert!(controller.start("python").is_empty());
        assert!(sink.all().is_empty());
    }

    #[tokio::test]
    async fn test_start_observes_starting_state() {
        let (controller, _sink) = controller();
        let gate = Arc::new(Notify::new());
        let b = Arc::new(MockService::new("b", &["rust"]).gated(gate.clone()));
        controller.register(b.clone());

        let handles = controller.start("rust");
        assert_eq!(handles.len(), 1);

        tokio::time::timeout(Duration::from_secs(5), async {
            while b.state() != ServiceState::Starting {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        assert_eq!(controller.service_stats()[0].state, "starting");

        gate.notify_one();
        join(handles).await;
        assert_eq!(controller.service_stats()[0].state, "running");
    }

    #[tokio::test]
    async fn test_start_by_id_for_service_without_languages() {
        let (controller, sink) = controller();
        let watcher = Arc::new(MockService::new("watcher", &[]));
        controller.register(watcher.clone());

        controller.start_by_id("watcher").unwrap().await.unwrap();
        assert_eq!(watcher.state(), ServiceState::Running);
        assert!(controller.start_by_id("watcher").is_none());

        assert!(controller.start_by_id("missing").is_none());
        assert_eq!(sink.count(Severity::Warning), 1);
    }

    #[tokio::test]
    async fn test_activate_file() {
        let (controller, _sink) = controller();
        let b = Arc::new(MockService::new("b", &["go", "rust"]));
        controller.register(b.clone());

        assert!(controller.activate_file(Path::new("notes.txt")).is_empty());
        join(controller.activate_file(Path::new("src/lib.rs"))).await;
        assert_eq!(b.state(), ServiceState::Running);
    }

    #[tokio::test]
    async fn test_stop() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());
        join(controller.start("go")).await;

        controller.stop("a").await;
        assert_eq!(a.state(), ServiceState::Stopped);

        controller.stop("missing").await;
        assert_eq!(sink.count(Severity::Warning), 1);
        assert_eq!(sink.messages().last().unwrap(), "Service missing not found");
    }

    #[tokio::test]
    async fn test_stop_invalid_state_is_reported() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());

        controller.stop("a").await;
        assert_eq!(a.state(), ServiceState::Initial);
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[tokio::test]
    async fn test_toggle_cycle() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());

        controller.toggle("a").await;
        assert_eq!(a.state(), ServiceState::Running);
        assert_eq!(a.init_count(), 1);

        controller.toggle("a").await;
        assert_eq!(a.state(), ServiceState::Stopped);
        assert_eq!(a.stop_count(), 1);

        controller.toggle("a").await;
        assert_eq!(a.state(), ServiceState::Running);
        assert_eq!(a.restart_count(), 1);

        // 준비 완료 알림은 init + restart 각각 한 번
        assert_eq!(sink.count(Severity::Info), 2);
    }

    #[tokio::test]
    async fn test_toggle_ignores_failed_service() {
        let (controller, sink) = controller();
        let bad = Arc::new(MockService::new("bad", &["go"]).failing_init());
        controller.register(bad.clone());

        controller.toggle("bad").await;
        assert_eq!(bad.state(), ServiceState::StartFailed);
        assert_eq!(sink.count(Severity::Error), 1);

        controller.toggle("bad").await;
        assert_eq!(bad.init_count(), 1);
        assert_eq!(bad.restart_count(), 0);
        assert_eq!(sink.all().len(), 1);
    }

    async fn wait_for_state(service: &MockService, state: ServiceState) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while service.state() != state {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_toggle_ignored_while_starting() {
        let (controller, sink) = controller();
        let gate = Arc::new(Notify::new());
        let a = Arc::new(MockService::new("a", &["go"]).gated(gate.clone()));
        controller.register(a.clone());

        let handles = controller.start("go");
        wait_for_state(&a, ServiceState::Starting).await;

        controller.toggle("a").await;
        assert_eq!(a.init_count(), 1);
        assert_eq!(a.stop_count(), 0);
        assert_eq!(a.restart_count(), 0);
        assert!(sink.all().is_empty());

        gate.notify_one();
        join(handles).await;
        assert_eq!(a.state(), ServiceState::Running);
    }

    #[tokio::test]
    async fn test_toggle_ignored_while_stopping() {
        let sink = RecordingSink::new();
        let controller = Arc::new(ServiceController::new(sink.clone()));
        let gate = Arc::new(Notify::new());
        let a = Arc::new(MockService::new("a", &["go"]).gated_stop(gate.clone()));
        controller.register(a.clone());
        controller.toggle("a").await;
        assert_eq!(a.state(), ServiceState::Running);

        let stopping = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.stop("a").await })
        };
        wait_for_state(&a, ServiceState::Stopping).await;

        controller.toggle("a").await;
        assert_eq!(a.init_count(), 1);
        assert_eq!(a.stop_count(), 1);
        assert_eq!(a.restart_count(), 0);
        assert_eq!(sink.count(Severity::Error), 0);
        assert_eq!(sink.count(Severity::Warning), 0);

        gate.notify_one();
        stopping.await.unwrap();
        assert_eq!(a.state(), ServiceState::Stopped);
    }

    #[test]
    fn test_start_outside_runtime_is_reported() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        controller.register(a.clone());

        assert!(controller.start("go").is_empty());
        assert!(controller.start_by_id("a").is_none());
        assert!(controller.activate_file(Path::new("main.go")).is_empty());

        assert_eq!(a.init_count(), 0);
        assert_eq!(a.state(), ServiceState::Initial);
        assert_eq!(sink.count(Severity::Error), 3);
        assert!(sink.messages()[0].contains("no async runtime"));
    }

    #[tokio::test]
    async fn test_notifications_are_tagged_with_source() {
        let (controller, sink) = controller();
        controller.register(Arc::new(MockService::new("a", &["go"])));
        join(controller.start("go")).await;
        controller.stop("missing").await;

        let received = sink.all();
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|n| n.source == NOTIFICATION_SOURCE));
    }

    #[tokio::test]
    async fn test_toggle_unknown_id() {
        let (controller, sink) = controller();
        controller.toggle("missing").await;

        assert_eq!(sink.all().len(), 1);
        assert_eq!(sink.count(Severity::Warning), 1);
    }

    #[test]
    fn test_dispose_continues_after_failure() {
        let (controller, sink) = controller();
        let a = Arc::new(MockService::new("a", &["go"]));
        let b = Arc::new(MockService::new("b", &["go"]).failing_dispose());
        let c = Arc::new(MockService::new("c", &["rust"]));
        controller.register_all([
            a.clone() as Arc<dyn Service>,
            b.clone() as Arc<dyn Service>,
            c.clone() as Arc<dyn Service>,
        ]);

        controller.dispose();
        controller.dispose();

        assert_eq!(a.dispose_count(), 1);
        assert_eq!(b.dispose_count(), 1);
        assert_eq!(c.dispose_count(), 1);
        assert_eq!(sink.count(Severity::Error), 1);
        assert_eq!(controller.service_stats().len(), 3);
        assert!(controller.is_disposed());
    }

    #[test]
    fn test_service_stats_serialize() {
        let (controller, _sink) = controller();
        controller.register(Arc::new(MockService::new("b", &["go", "rust"])));

        let stats = controller.service_stats();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": "b", "state": "init", "languageIds": ["go", "rust"]}])
        );
    }

    struct BrokenProvider;

    impl ServiceProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn create(&self) -> Result<Arc<dyn Service>> {
            Err(Error::Config("cannot build".into()))
        }
    }

    struct PartialDiscovery;

    #[async_trait]
    impl ServiceDiscovery for PartialDiscovery {
        fn name(&self) -> &str {
            "partial"
        }

        async fn discover(&self) -> DiscoveryReport {
            let mut report = StaticDiscovery::default()
                .with(Arc::new(MockService::new("a", &["go"])))
                .discover()
                .await;
            report.push_provider(Arc::new(BrokenProvider));
            report.push_failure("/nowhere", Error::discovery("/nowhere", "unreadable"));
            report
        }
    }

    #[tokio::test]
    async fn test_load_keeps_partial_results() {
        let (controller, sink) = controller();

        let loaded = controller.load(&PartialDiscovery).await;

        assert_eq!(loaded, 1);
        assert!(controller.get_service("a").is_some());
        assert_eq!(sink.count(Severity::Error), 2);
    }
}
