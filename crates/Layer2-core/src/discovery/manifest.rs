//! Manifest discovery - `service.json` 기반 서비스 발견
//!
//! 디렉토리 구조:
//!
//! ```text
//! .servicehub/services/
//! ├── gopls/
//! │   └── service.json
//! └── rust-analyzer/
//!     └── service.json
//! ```
//!
//! 검색 순서: 설정 인라인 → 프로젝트 → 사용자 → 추가 경로.
//! 같은 ID가 여러 번 발견되면 먼저 발견된 것이 등록됩니다.

use super::traits::{DiscoveryReport, ServiceDiscovery, ServiceProvider};
use crate::service::{ProcessService, Service};
use async_trait::async_trait;
use servicehub_foundation::{Error, HubConfig, Result, ServiceManifest, CONFIG_DIR_NAME};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

/// 매니페스트 파일 이름
pub const SERVICE_MANIFEST_FILE: &str = "service.json";

/// 서비스 디렉토리 이름
const SERVICES_DIR_NAME: &str = "services";

// ============================================================================
// ManifestScope
// ============================================================================

/// 발견 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestScope {
    /// 설정 파일 인라인 (`services` 필드)
    Config,
    /// 프로젝트 레벨 (.servicehub/services)
    Project,
    /// 사용자 레벨 (~/.servicehub/services)
    User,
    /// 추가 검색 경로
    Custom,
}

impl ManifestScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestScope::Config => "config",
            ManifestScope::Project => "project",
            ManifestScope::User => "user",
            ManifestScope::Custom => "custom",
        }
    }
}

// ============================================================================
// ProcessServiceProvider
// ============================================================================

/// 매니페스트 → `ProcessService` 프로바이더
#[derive(Debug, Clone)]
pub struct ProcessServiceProvider {
    manifest: ServiceManifest,

    /// 매니페스트가 있던 디렉토리 (인라인이면 None)
    base_dir: Option<PathBuf>,

    scope: ManifestScope,
}

impl ProcessServiceProvider {
    pub fn new(manifest: ServiceManifest, scope: ManifestScope) -> Self {
        Self {
            manifest,
            base_dir: None,
            scope,
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn manifest(&self) -> &ServiceManifest {
        &self.manifest
    }

    pub fn scope(&self) -> ManifestScope {
        self.scope
    }

    /// 상대 경로 명령어(`./bin/server`)는 매니페스트 디렉토리 기준으로 해석
    fn resolved_manifest(&self) -> ServiceManifest {
        let mut manifest = self.manifest.clone();
        if let Some(base) = &self.base_dir {
            let command = Path::new(&manifest.command);
            if command.is_relative() && command.components().count() > 1 {
                manifest.command = base.join(command).to_string_lossy().into_owned();
            }
        }
        manifest
    }
}

impl ServiceProvider for ProcessServiceProvider {
    fn name(&self) -> &str {
        &self.manifest.id
    }

    fn create(&self) -> Result<Arc<dyn Service>> {
        let service = ProcessService::from_manifest(&self.resolved_manifest())?;
        Ok(Arc::new(service))
    }
}

// ============================================================================
// ManifestDiscovery
// ============================================================================

/// 매니페스트 발견 시스템
#[derive(Debug, Default)]
pub struct ManifestDiscovery {
    /// 인라인 매니페스트 (설정 파일)
    inline: Vec<ServiceManifest>,

    /// 검색 경로들 (검색 순서)
    search_paths: Vec<(PathBuf, ManifestScope)>,
}

impl ManifestDiscovery {
    /// 기본 검색 경로로 생성 (프로젝트 → 사용자)
    pub fn new(working_dir: &Path) -> Self {
        Self::with_roots(working_dir, dirs::home_dir().as_deref())
    }

    /// 프로젝트 루트와 사용자 루트 지정
    ///
    /// 두 루트가 같은 디렉토리(홈에서 실행)면 사용자 경로는 추가하지 않습니다.
    fn with_roots(project_root: &Path, user_root: Option<&Path>) -> Self {
        let mut discovery = Self::default();
        discovery.push_unique(services_dir(project_root), ManifestScope::Project);
        if let Some(user_root) = user_root {
            discovery.push_unique(services_dir(user_root), ManifestScope::User);
        }
        discovery
    }

    /// 인라인 매니페스트만 사용 (디렉토리 스캔 없음)
    pub fn from_manifests(manifests: Vec<ServiceManifest>) -> Self {
        Self {
            inline: manifests,
            search_paths: Vec::new(),
        }
    }

    /// 설정에서 생성 - 인라인 서비스 + 기본 경로 + 추가 경로
    pub fn from_config(working_dir: &Path, config: &HubConfig) -> Self {
        let mut discovery = Self::new(working_dir);
        discovery.inline = config.services.clone();
        for path in &config.search_paths {
            discovery.add_search_path(path.clone());
        }
        discovery
    }

    /// 추가 검색 경로
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.push_unique(path.into(), ManifestScope::Custom);
    }

    /// 이미 등록된 경로(정규화 기준)는 무시
    fn push_unique(&mut self, path: PathBuf, scope: ManifestScope) {
        let key = canonical(&path);
        if self.search_paths.iter().any(|(p, _)| canonical(p) == key) {
            debug!(scope = scope.as_str(), "Skipping duplicate service directory {:?}", path);
            return;
        }
        self.search_paths.push((path, scope));
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_search_path(path);
        self
    }

    pub fn search_paths(&self) -> impl Iterator<Item = (&Path, ManifestScope)> {
        self.search_paths.iter().map(|(p, s)| (p.as_path(), *s))
    }

    // ========================================================================
    // 스캔
    // ========================================================================

    fn discover_inline(&self, report: &mut DiscoveryReport) {
        for manifest in &self.inline {
            match manifest.validate() {
                Ok(()) => report.push_provider(Arc::new(ProcessServiceProvider::new(
                    manifest.clone(),
                    ManifestScope::Config,
                ))),
                Err(e) => {
                    warn!(service = %manifest.id, "Invalid inline service manifest: {}", e);
                    report.push_failure(ManifestScope::Config.as_str(), e);
                }
            }
        }
    }

    /// 서비스 디렉토리 스캔 - 하위 디렉토리 이름 순
    async fn scan_directory(&self, dir: &Path, scope: ManifestScope, report: &mut DiscoveryReport) {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to scan service directory {:?}: {}", dir, e);
                report.push_failure(dir.display().to_string(), Error::from(e));
                return;
            }
        };

        let mut service_dirs = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.is_dir() {
                        service_dirs.push(path);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    report.push_failure(dir.display().to_string(), Error::from(e));
                    break;
                }
            }
        }
        service_dirs.sort();

        for service_dir in service_dirs {
            let manifest_path = service_dir.join(SERVICE_MANIFEST_FILE);
            if !manifest_path.exists() {
                continue;
            }

            match parse_manifest(&manifest_path).await {
                Ok(manifest) => {
                    debug!("Found service: {} at {:?}", manifest.id, service_dir);
                    let provider =
                        ProcessServiceProvider::new(manifest, scope).with_base_dir(&service_dir);
                    report.push_provider(Arc::new(provider));
                }
                Err(e) => {
                    warn!("Failed to parse service manifest {:?}: {}", manifest_path, e);
                    report.push_failure(manifest_path.display().to_string(), e);
                }
            }
        }
    }
}

fn services_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(SERVICES_DIR_NAME)
}

/// 존재하지 않는 경로는 그대로 비교
fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// service.json 파싱 + 검증
async fn parse_manifest(path: &Path) -> Result<ServiceManifest> {
    let content = fs::read_to_string(path).await?;
    let manifest: ServiceManifest = serde_json::from_str(&content)
        .map_err(|e| Error::discovery(path.display().to_string(), e.to_string()))?;
    manifest.validate()?;
    Ok(manifest)
}

#[async_trait]
impl ServiceDiscovery for ManifestDiscovery {
    fn name(&self) -> &str {
        "manifest"
    }

    async fn discover(&self) -> DiscoveryReport {
        let mut report = DiscoveryReport::new();

        self.discover_inline(&mut report);

        for (path, scope) in &self.search_paths {
            if !path.exists() {
                debug!(scope = scope.as_str(), "Service directory {:?} does not exist", path);
                continue;
            }
            self.scan_directory(path, *scope, &mut report).await;
        }

        info!(
            providers = report.providers.len(),
            failures = report.failures.len(),
            "Discovered service manifests"
        );
        report
    }
}
