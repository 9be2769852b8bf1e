//! Notification Center - 기본 알림 싱크 구현
//!
//! tracing 로그 + 히스토리 + broadcast 채널로 알림을 전달합니다.

use super::sink::NotificationSink;
use super::types::{Notification, Severity};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

// ============================================================================
// NotificationCenterConfig
// ============================================================================

/// 알림 센터 설정
#[derive(Debug, Clone)]
pub struct NotificationCenterConfig {
    /// 브로드캐스트 채널 용량
    pub channel_capacity: usize,

    /// 알림 히스토리 보관 개수
    pub history_size: usize,
}

impl Default for NotificationCenterConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            history_size: 100,
        }
    }
}

// ============================================================================
// NotificationCenter
// ============================================================================

/// 알림 센터
///
/// ## 사용법
///
/// ```ignore
/// use servicehub_foundation::notification::{NotificationCenter, NotificationSink};
///
/// let center = Arc::new(NotificationCenter::new());
/// let mut rx = center.subscribe();
///
/// center.notify_info("service gopls started");
///
/// let n = rx.recv().await?;
/// ```
pub struct NotificationCenter {
    config: NotificationCenterConfig,

    /// 브로드캐스트 채널 송신자
    sender: broadcast::Sender<Notification>,

    /// 최근 알림 히스토리
    history: Mutex<VecDeque<Notification>>,

    /// 전달된 알림 수
    delivered: AtomicU64,
}

impl NotificationCenter {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::with_config(NotificationCenterConfig::default())
    }

    /// 커스텀 설정으로 생성
    pub fn with_config(config: NotificationCenterConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            history: Mutex::new(VecDeque::with_capacity(config.history_size)),
            config,
            sender,
            delivered: AtomicU64::new(0),
        }
    }

    /// 알림 구독 (UI 등)
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// 히스토리 조회 (오래된 순)
    pub fn history(&self) -> Vec<Notification> {
        self.history.lock().iter().cloned().collect()
    }

    /// 심각도별 히스토리 조회
    pub fn history_by_severity(&self, severity: Severity) -> Vec<Notification> {
        self.history
            .lock()
            .iter()
            .filter(|n| n.severity == severity)
            .cloned()
            .collect()
    }

    /// 히스토리 클리어
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    /// 지금까지 전달된 알림 수
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(source = %notification.source, "{}", notification.message),
            Severity::Warning => warn!(source = %notification.source, "{}", notification.message),
            Severity::Error => error!(source = %notification.source, "{}", notification.message),
        }

        if self.config.history_size > 0 {
            let mut history = self.history.lock();
            if history.len() >= self.config.history_size {
                history.pop_front();
            }
            history.push_back(notification.clone());
        }

        self.delivered.fetch_add(1, Ordering::Relaxed);

        // 구독자가 없어도 OK
        let _ = self.sender.send(notification);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
