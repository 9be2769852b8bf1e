//! # servicehub-foundation
//!
//! Foundation layer for ServiceHub:
//! - Error: 중앙 에러 타입 (`Error`, `Result`)
//! - Notification: 호스트 UI 알림 경계 (`NotificationSink`, `NotificationCenter`)
//! - Config: 통합 설정 (`HubConfig`, `ServiceManifest`)
//! - Storage: ConfigLayer (설정 파일 레이어)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  servicehub-core (Registry / Router / Controller)       │
//! │                     │                                   │
//! │          ┌─────────┴──────────┐                        │
//! │          ▼                    ▼                        │
//! │   NotificationSink        HubConfig                    │
//! │   (info/warn/error)       (global + project)           │
//! │                               │                        │
//! │                               ▼                        │
//! │                          ConfigLayer                   │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod notification;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Notification (알림)
// ============================================================================
pub use notification::{
    Notification, NotificationCenter, NotificationCenterConfig, NotificationSink, Severity,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{HubConfig, ServiceManifest, CONFIG_DIR_NAME, HUB_CONFIG_FILE};

// ============================================================================
// Storage
// ============================================================================
pub use storage::{ConfigLayer, LayerKind};
