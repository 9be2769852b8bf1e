//! Service traits - 핵심 서비스 인터페이스

use super::state::ServiceState;
use async_trait::async_trait;
use servicehub_foundation::Result;
use std::sync::Arc;

/// 준비 완료 콜백 - 인자는 서비스 ID
pub type ReadyCallback = Arc<dyn Fn(&str) + Send + Sync>;

// ============================================================================
// Service Trait - 모든 서비스가 구현해야 하는 인터페이스
// ============================================================================

/// 서비스 트레이트
///
/// 컨트롤러는 이 인터페이스 외에 서비스 내부를 들여다보지 않습니다.
/// 전이 메서드(`init`/`stop`/`restart`)는 실패 시 서비스 스스로
/// `StartFailed` 등 적절한 상태에 도달한 뒤 `Err`를 반환해야 합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 고유 서비스 ID
    fn id(&self) -> &str;

    /// 지원 언어 ID 목록 (순서 유지, 비어 있을 수 있음)
    fn language_ids(&self) -> &[String];

    /// 활성화 여부 - false면 등록되지 않음
    fn enabled(&self) -> bool {
        true
    }

    /// 현재 상태
    fn state(&self) -> ServiceState;

    /// `Initial → Starting → Running | StartFailed`
    async fn init(&self) -> Result<()>;

    /// `Running → Stopping → Stopped`
    async fn stop(&self) -> Result<()>;

    /// `Stopped → Starting → Running | StartFailed`
    async fn restart(&self) -> Result<()>;

    /// 리소스 해제 (프로세스 종료 시 한 번 호출)
    fn dispose(&self) -> Result<()>;

    /// 준비 완료 콜백 등록 - "준비됨" 전이마다 한 번씩 호출
    fn on_ready(&self, callback: ReadyCallback);

    /// 언어 ID 지원 여부
    fn supports(&self, language_id: &str) -> bool {
        self.language_ids().iter().any(|l| l == language_id)
    }
}
