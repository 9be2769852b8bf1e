//! Notification System - 호스트 UI 알림
//!
//! 컨트롤러의 사용자 가시적 실패/상태 변화는 모두 이 경계를 통해 전달됩니다.
//!
//! ```text
//! ServiceController ──notify()──► NotificationSink
//!                                   └── NotificationCenter
//!                                        ├── tracing 로그
//!                                        ├── history (최근 N개)
//!                                        └── broadcast ──► UI 구독자
//! ```

mod center;
mod sink;
mod types;

pub use center::{NotificationCenter, NotificationCenterConfig};
pub use sink::NotificationSink;
pub use types::{Notification, Severity};
