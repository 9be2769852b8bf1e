//! Static discovery - 이미 생성된 서비스 인스턴스

use super::traits::{DiscoveryReport, ServiceDiscovery, ServiceProvider};
use crate::service::Service;
use async_trait::async_trait;
use servicehub_foundation::Result;
use std::sync::Arc;

/// 인스턴스를 그대로 돌려주는 프로바이더
struct InstanceProvider {
    service: Arc<dyn Service>,
}

impl ServiceProvider for InstanceProvider {
    fn name(&self) -> &str {
        self.service.id()
    }

    fn create(&self) -> Result<Arc<dyn Service>> {
        Ok(Arc::clone(&self.service))
    }
}

/// 정적 발견 소스
#[derive(Default)]
pub struct StaticDiscovery {
    services: Vec<Arc<dyn Service>>,
}

impl StaticDiscovery {
    pub fn new(services: Vec<Arc<dyn Service>>) -> Self {
        Self { services }
    }

    pub fn with(mut self, service: Arc<dyn Service>) -> Self {
        self.services.push(service);
        self
    }
}

#[async_trait]
impl ServiceDiscovery for StaticDiscovery {
    fn name(&self) -> &str {
        "static"
    }

    async fn discover(&self) -> DiscoveryReport {
        let mut report = DiscoveryReport::new();
        for service in &self.services {
            report.push_provider(Arc::new(InstanceProvider {
                service: Arc::clone(service),
            }));
        }
        report
    }
}
