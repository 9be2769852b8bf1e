//! Service Registry - 서비스 ID → 서비스 인스턴스 매핑
//!
//! - ID당 하나의 엔트리, 중복 등록은 거부 (덮어쓰지 않음)
//! - 삽입 순서 유지 (상태 보고/라우팅 순서)
//! - 언어 ID 인덱스는 등록 시에만 증가

mod index;

pub use index::LanguageIndex;

use crate::service::Service;
use parking_lot::RwLock;
use servicehub_foundation::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Default)]
struct RegistryInner {
    /// 등록 순서대로 보관
    services: Vec<Arc<dyn Service>>,

    /// ID → services 인덱스
    by_id: HashMap<String, usize>,

    /// 지원 언어 ID 합집합
    languages: LanguageIndex,
}

/// 서비스 레지스트리
///
/// 등록은 초기화(발견) 단계에서 이뤄지고 이후에는 읽기만 합니다.
/// 락 가드는 `.await` 너머로 유지되지 않도록 항상 `Arc`를 복제해 반환합니다.
#[derive(Default)]
pub struct ServiceRegistry {
    inner: RwLock<RegistryInner>,
}

impl ServiceRegistry {
    /// 새 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 서비스 등록
    ///
    /// - 비활성화된 서비스는 저장하지 않고 `Ok(false)`
    /// - 빈 ID는 `Error::InvalidInput`
    /// - 이미 등록된 ID는 `Error::DuplicateService` (기존 엔트리 유지)
    pub fn register(&self, service: Arc<dyn Service>) -> Result<bool> {
        if !service.enabled() {
            debug!(service = %service.id(), "Skipping disabled service");
            return Ok(false);
        }

        let id = service.id().to_string();
        if id.trim().is_empty() {
            return Err(Error::InvalidInput("service id must not be empty".to_string()));
        }

        let mut inner = self.inner.write();
        if inner.by_id.contains_key(&id) {
            return Err(Error::DuplicateService(id));
        }

        let added = inner.languages.extend(service.language_ids());
        let position = inner.services.len();
        inner.services.push(service);
        inner.by_id.insert(id.clone(), position);

        info!(service = %id, new_languages = added, "Registered service");
        Ok(true)
    }

    /// 서비스 조회
    pub fn get(&self, id: &str) -> Option<Arc<dyn Service>> {
        let inner = self.inner.read();
        inner
            .by_id
            .get(id)
            .map(|&position| Arc::clone(&inner.services[position]))
    }

    /// 서비스 존재 여부 확인
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().by_id.contains_key(id)
    }

    /// 모든 서비스 (등록 순서)
    pub fn list(&self) -> Vec<Arc<dyn Service>> {
        self.inner.read().services.iter().map(Arc::clone).collect()
    }

    /// 특정 언어를 지원하는 서비스 (등록 순서, 상태 무관)
    pub fn supporting(&self, language_id: &str) -> Vec<Arc<dyn Service>> {
        self.inner
            .read()
            .services
            .iter()
            .filter(|service| service.supports(language_id))
            .map(Arc::clone)
            .collect()
    }

    /// 언어 ID가 인덱스에 있는지 확인
    pub fn has_language(&self, language_id: &str) -> bool {
        self.inner.read().languages.contains(language_id)
    }

    /// 인덱스된 언어 ID 목록 (처음 등장한 순서)
    pub fn language_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .languages
            .iter()
            .map(str::to_string)
            .collect()
    }

    /// 서비스 수
    pub fn len(&self) -> usize {
        self.inner.read().services.len()
    }

    /// 비어있는지 확인
    pub fn is_empty(&self) -> bool {
        self.inner.read().services.is_empty()
    }
}
