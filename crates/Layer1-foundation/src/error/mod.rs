//! Error types for ServiceHub
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ServiceHub 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 서비스 레지스트리 관련
    // ========================================================================
    #[error("Service {0} is already registered")]
    DuplicateService(String),

    #[error("Service {0} not found")]
    ServiceNotFound(String),

    // ========================================================================
    // 서비스 라이프사이클 관련
    // ========================================================================
    #[error("Invalid transition for service {service}: {from} -> {to}")]
    InvalidTransition {
        service: String,
        from: String,
        to: String,
    },

    #[error("Service {service} transition failed: {message}")]
    Transition { service: String, message: String },

    #[error("Service {service} dispose failed: {message}")]
    Dispose { service: String, message: String },

    // ========================================================================
    // 발견 관련
    // ========================================================================
    #[error("Discovery error: {source_name} - {message}")]
    Discovery {
        source_name: String,
        message: String,
    },

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::DuplicateService(_)
                | Error::ServiceNotFound(_)
                | Error::InvalidInput(_)
                | Error::Transition { .. }
                | Error::Discovery { .. }
        )
    }

    /// 상태 전이 실패 에러 생성 헬퍼
    pub fn transition(service: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Transition {
            service: service.into(),
            message: message.into(),
        }
    }

    /// 잘못된 상태 전이 에러 생성 헬퍼
    pub fn invalid_transition(
        service: impl Into<String>,
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
    ) -> Self {
        Error::InvalidTransition {
            service: service.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// 발견 에러 생성 헬퍼
    pub fn discovery(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Discovery {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// dispose 실패 에러 생성 헬퍼
    pub fn dispose(service: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Dispose {
            service: service.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
