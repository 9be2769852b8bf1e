//! Notification Types - 호스트 UI로 전달되는 알림 타입 정의

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Severity
// ============================================================================

/// 알림 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// 일반 정보
    Info,
    /// 경고
    Warning,
    /// 에러
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Notification
// ============================================================================

/// 호스트 UI 알림
///
/// 사용자에게 보여지는 치명적이지 않은 메시지입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// 메시지 본문
    pub message: String,

    /// 심각도
    pub severity: Severity,

    /// 발생 위치 (모듈/컴포넌트)
    #[serde(default)]
    pub source: String,

    /// 발생 시간
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// 새 알림 생성
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            source: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// 소스 설정
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_notification_display() {
        let n = Notification::warning("service gopls not found").with_source("controller");
        assert_eq!(n.to_string(), "[warning] service gopls not found");
        assert_eq!(n.source, "controller");
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
