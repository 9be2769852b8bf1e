//! Process Service - 외부 프로세스 기반 서비스
//!
//! 매니페스트에 선언된 명령어를 자식 프로세스로 실행합니다.
//! 프로세스와의 통신은 이 타입의 관심사가 아닙니다.

use super::base::ServiceCore;
use super::state::ServiceState;
use super::traits::{ReadyCallback, Service};
use async_trait::async_trait;
use servicehub_foundation::{Error, Result, ServiceManifest};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// 프로세스 서비스
pub struct ProcessService {
    core: ServiceCore,

    /// 실행 명령어
    command: String,

    /// 명령어 인자
    args: Vec<String>,

    /// 서버 프로세스
    process: Mutex<Option<Child>>,
}

impl ProcessService {
    pub fn new(
        id: impl Into<String>,
        language_ids: Vec<String>,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            core: ServiceCore::new(id, language_ids),
            command: command.into(),
            args,
            process: Mutex::new(None),
        }
    }

    /// 매니페스트에서 생성
    pub fn from_manifest(manifest: &ServiceManifest) -> Result<Self> {
        manifest.validate()?;
        let mut service = Self::new(
            manifest.id.clone(),
            manifest.language_ids.clone(),
            manifest.command.clone(),
            manifest.args.clone(),
        );
        service.core = service.core.with_enabled(manifest.enable);
        Ok(service)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// 자식 프로세스 PID (실행 중인 경우)
    pub async fn pid(&self) -> Option<u32> {
        self.process.lock().await.as_ref().and_then(|c| c.id())
    }

    fn resolve_command(&self) -> Result<PathBuf> {
        which::which(&self.command).map_err(|e| {
            Error::transition(
                self.core.id(),
                format!("command not found: {} ({})", self.command, e),
            )
        })
    }

    fn spawn(&self) -> Result<Child> {
        let program = self.resolve_command()?;

        Command::new(program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Error::transition(
                    self.core.id(),
                    format!("failed to start {}: {}", self.command, e),
                )
            })
    }

    /// `Starting`에서 프로세스를 띄우고 `Running` 또는 `StartFailed`로 이동
    async fn launch(&self) -> Result<()> {
        self.core.transition(ServiceState::Starting)?;

        match self.spawn() {
            Ok(child) => {
                let pid = child.id();
                *self.process.lock().await = Some(child);
                self.core.transition(ServiceState::Running)?;
                info!(service = %self.core.id(), ?pid, "Service process started");
                Ok(())
            }
            Err(e) => {
                self.core.transition(ServiceState::StartFailed)?;
                warn!(service = %self.core.id(), error = %e, "Service failed to start");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Service for ProcessService {
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
        self.launch().await
    }

    async fn stop(&self) -> Result<()> {
        self.core.transition(ServiceState::Stopping)?;

        if let Some(mut child) = self.process.lock().await.take() {
            // 이미 종료된 프로세스면 kill 실패는 무시
            if let Err(e) = child.kill().await {
                debug!(service = %self.core.id(), error = %e, "Kill failed, process already gone");
            }
        }

        self.core.transition(ServiceState::Stopped)?;
        info!(service = %self.core.id(), "Service process stopped");
        Ok(())
    }

    async fn restart(&self) -> Result<()> {
        if self.core.state() == ServiceState::Running {
            self.stop().await?;
        }
        self.launch().await
    }

    fn dispose(&self) -> Result<()> {
        let mut process = self.process.try_lock().map_err(|_| {
            Error::dispose(self.core.id(), "a transition is still in progress")
        })?;

        if let Some(mut child) = process.take() {
            child
                .start_kill()
                .map_err(|e| Error::dispose(self.core.id(), e.to_string()))?;
        }

        debug!(service = %self.core.id(), "Service disposed");
        Ok(())
    }

    fn on_ready(&self, callback: ReadyCallback) {
        self.core.add_ready_callback(callback);
    }
}

impl std::fmt::Debug for ProcessService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessService")
            .field("core", &self.core)
            .field("command", &self.command)
            .field("args", &self.args)
            .finish()
    }
}
