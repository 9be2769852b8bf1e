//! Notification Sink - 호스트 UI 알림 경계

use super::types::{Notification, Severity};

/// 알림 싱크 trait
///
/// 사용자에게 보여지는 메시지가 빠져나가는 유일한 경계입니다.
/// 전달은 fire-and-forget이며, 전달 실패는 호출자에게 전파되지 않습니다.
pub trait NotificationSink: Send + Sync {
    /// 알림 전달
    fn notify(&self, notification: Notification);

    /// 에러 알림
    fn notify_error(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Error));
    }

    /// 경고 알림
    fn notify_warning(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Warning));
    }

    /// 정보 알림
    fn notify_info(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Info));
    }
}
