//! CLI session - 설정 로드, 서비스 발견, 알림 출력

use crate::render;
use futures::future::join_all;
use servicehub_core::{ControllerConfig, ManifestDiscovery, ServiceController};
use servicehub_foundation::{
    HubConfig, Notification, NotificationCenter, NotificationCenterConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// 세션 옵션 (CLI 인자)
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// 명시적 설정 파일
    pub config_path: Option<PathBuf>,

    /// 추가 매니페스트 디렉토리
    pub search_paths: Vec<PathBuf>,

    pub working_dir: PathBuf,
}

/// CLI 세션 - 컨트롤러 + 알림 수신기
pub struct Session {
    controller: Arc<ServiceController>,
    notifications: broadcast::Receiver<Notification>,
}

impl Session {
    /// 설정 로드 → 컨트롤러 생성 → 서비스 발견/등록
    pub async fn open(options: &SessionOptions) -> anyhow::Result<Self> {
        let mut config = match &options.config_path {
            Some(path) => HubConfig::load_from(path)?,
            None => HubConfig::load_in(&options.working_dir)?,
        };
        for path in &options.search_paths {
            config = config.with_search_path(path.clone());
        }

        let center = Arc::new(NotificationCenter::with_config(NotificationCenterConfig {
            history_size: config.notification_history(),
            ..NotificationCenterConfig::default()
        }));
        let notifications = center.subscribe();

        let controller = Arc::new(ServiceController::with_config(
            center,
            ControllerConfig::from_hub(&config),
        ));

        let discovery = ManifestDiscovery::from_config(&options.working_dir, &config);
        let loaded = controller.load(&discovery).await;
        debug!(loaded, "Session ready");

        Ok(Self {
            controller,
            notifications,
        })
    }

    pub fn controller(&self) -> &Arc<ServiceController> {
        &self.controller
    }

    /// 쌓인 알림을 stderr로 출력
    pub fn flush_notifications(&mut self) {
        loop {
            match self.notifications.try_recv() {
                Ok(notification) => eprintln!("{}", notification),
                Err(TryRecvError::Lagged(skipped)) => {
                    eprintln!("[warning] {} notifications dropped", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    /// 전이 작업 완료 대기 후 상태 출력
    pub async fn finish(&mut self, handles: Vec<JoinHandle<()>>) -> anyhow::Result<()> {
        wait_all(handles).await;
        self.flush_notifications();
        render::print_status(&self.controller.service_stats(), false)?;
        Ok(())
    }
}

/// 백그라운드 init 작업 대기
pub async fn wait_all(handles: Vec<JoinHandle<()>>) {
    for result in join_all(handles).await {
        if let Err(e) = result {
            warn!("Service task failed: {}", e);
        }
    }
}

/// `run` 커맨드 - 파일 언어 활성화 후 Ctrl-C까지 유지
pub async fn run(mut session: Session, files: &[PathBuf]) -> anyhow::Result<()> {
    let handles: Vec<_> = files
        .iter()
        .flat_map(|file| session.controller().activate_file(Path::new(file)))
        .collect();
    session.finish(handles).await?;

    // 이후 알림은 도착하는 대로 출력
    let mut notifications = session.notifications.resubscribe();
    let printer = tokio::spawn(async move {
        loop {
            match notifications.recv().await {
                Ok(notification) => eprintln!("{}", notification),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    eprintln!("[warning] {} notifications dropped", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    info!("Services running, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    session.controller().dispose();
    printer.abort();
    Ok(())
}
