//! Service State - 서비스 라이프사이클 상태 모델
//!
//! ```text
//!            init()              ready
//! Initial ──────────► Starting ─────────► Running
//!                        │  ▲                │ stop()
//!                 failed │  │ restart()      ▼
//!                        ▼  │             Stopping
//!                  StartFailed               │
//!                           ▲                ▼
//!                           └──────────── Stopped
//!                             (restart → Starting)
//! ```

use serde::{Deserialize, Serialize};

/// 서비스 라이프사이클 상태
///
/// 새로운 상태가 추가될 수 있으므로 `#[non_exhaustive]`입니다.
/// 알 수 없는 원시 값은 [`ServiceState::Unknown`]으로 디코딩됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum ServiceState {
    /// 등록 직후 (유일한 진입 상태)
    #[serde(rename = "init")]
    Initial,
    /// 시작 중
    Starting,
    /// 실행 중 (준비 완료)
    Running,
    /// 시작 실패
    StartFailed,
    /// 종료 중
    Stopping,
    /// 종료됨
    Stopped,
    /// 인식할 수 없는 상태
    Unknown,
}

impl ServiceState {
    /// 외부 상태 보고용 정규 라벨
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "init",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::StartFailed => "startFailed",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Unknown => "unknown",
        }
    }

    /// 원시 값으로 인코딩 (atomic 저장용)
    pub fn as_raw(&self) -> u8 {
        match self {
            Self::Initial => 0,
            Self::Starting => 1,
            Self::Running => 2,
            Self::StartFailed => 3,
            Self::Stopping => 4,
            Self::Stopped => 5,
            Self::Unknown => u8::MAX,
        }
    }

    /// 원시 값 디코딩 - 알 수 없는 값은 `Unknown`
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Initial,
            1 => Self::Starting,
            2 => Self::Running,
            3 => Self::StartFailed,
            4 => Self::Stopping,
            5 => Self::Stopped,
            _ => Self::Unknown,
        }
    }

    /// 라벨에서 파싱 - 알 수 없는 라벨은 `Unknown`
    pub fn from_label(label: &str) -> Self {
        match label {
            "init" => Self::Initial,
            "starting" => Self::Starting,
            "running" => Self::Running,
            "startFailed" => Self::StartFailed,
            "stopping" => Self::Stopping,
            "stopped" => Self::Stopped,
            _ => Self::Unknown,
        }
    }

    /// 합법적인 상태 전이인지 확인
    pub fn can_transition_to(&self, next: ServiceState) -> bool {
        use ServiceState::*;
        matches!(
            (self, next),
            (Initial, Starting)
                | (Starting, Running)
                | (Starting, StartFailed)
                | (Running, Stopping)
                | (Stopping, Stopped)
                | (Stopped, Starting)
                | (StartFailed, Starting)
        )
    }

    /// 전이가 진행 중인 상태인지
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Starting | Self::Stopping)
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
