//! Discovery traits

use crate::service::Service;
use async_trait::async_trait;
use servicehub_foundation::{Error, Result};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// ServiceProvider - 서비스 생성자
// ============================================================================

/// 서비스 프로바이더 - 발견된 패키지 하나를 서비스 인스턴스로 만듦
pub trait ServiceProvider: Send + Sync {
    /// 프로바이더 이름 (보통 서비스 ID)
    fn name(&self) -> &str;

    /// 서비스 인스턴스 생성
    fn create(&self) -> Result<Arc<dyn Service>>;
}

// ============================================================================
// DiscoveryReport - 발견 결과
// ============================================================================

/// 발견 실패 항목
#[derive(Debug)]
pub struct DiscoveryFailure {
    /// 실패한 위치 (경로, "config" 등)
    pub source: String,

    pub error: Error,
}

impl DiscoveryFailure {
    pub fn new(source: impl Into<String>, error: Error) -> Self {
        Self {
            source: source.into(),
            error,
        }
    }
}

impl fmt::Display for DiscoveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// 발견 결과 - 부분 성공 허용
#[derive(Default)]
pub struct DiscoveryReport {
    /// 발견 순서대로 정렬된 프로바이더
    pub providers: Vec<Arc<dyn ServiceProvider>>,

    pub failures: Vec<DiscoveryFailure>,
}

impl DiscoveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_provider(&mut self, provider: Arc<dyn ServiceProvider>) {
        self.providers.push(provider);
    }

    pub fn push_failure(&mut self, source: impl Into<String>, error: Error) {
        self.failures.push(DiscoveryFailure::new(source, error));
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Debug for DiscoveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("DiscoveryReport")
            .field("providers", &names)
            .field("failures", &self.failures)
            .finish()
    }
}

// ============================================================================
// ServiceDiscovery - 발견 소스
// ============================================================================

/// 서비스 발견 소스
#[async_trait]
pub trait ServiceDiscovery: Send + Sync {
    /// 소스 이름 (로그용)
    fn name(&self) -> &str;

    /// 프로바이더 발견 - 실패는 보고서에 기록하고 계속 진행
    async fn discover(&self) -> DiscoveryReport;
}
