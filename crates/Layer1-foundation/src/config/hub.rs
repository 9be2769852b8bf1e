//! Hub Config - 통합 설정
//!
//! 글로벌(`<config_dir>/servicehub/config.json`) + 프로젝트(`.servicehub/config.json`)
//! 설정을 병합하여 로드합니다. 프로젝트 설정이 글로벌 설정을 오버라이드합니다.

use crate::storage::ConfigLayer;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 설정 파일명
pub const HUB_CONFIG_FILE: &str = "config.json";

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".servicehub";

// ============================================================================
// Service Manifest
// ============================================================================

/// 서비스 매니페스트 - 설치 가능한 서비스 하나의 선언
///
/// `service.json` 파일 또는 `config.json`의 `services` 항목으로 작성합니다.
///
/// ```json
/// {
///   "id": "gopls",
///   "languageIds": ["go"],
///   "command": "gopls",
///   "args": ["serve"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceManifest {
    /// 고유 서비스 ID
    pub id: String,

    /// 지원 언어 ID 목록
    #[serde(default)]
    pub language_ids: Vec<String>,

    /// 활성화 여부 (false면 등록되지 않음)
    #[serde(default = "default_true")]
    pub enable: bool,

    /// 실행 명령어
    pub command: String,

    /// 명령어 인자
    #[serde(default)]
    pub args: Vec<String>,
}

impl ServiceManifest {
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language_ids: Vec::new(),
            enable: true,
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_ids.push(language_id.into());
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enable = false;
        self
    }

    /// 필수 필드 검증
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Config("service manifest has an empty id".to_string()));
        }
        if self.command.trim().is_empty() {
            return Err(Error::Config(format!(
                "service manifest {} has an empty command",
                self.id
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Hub Config (통합)
// ============================================================================

/// ServiceHub 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 알 수 없는 언어 ID로 start 요청 시 경고 알림
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_unknown_language: Option<bool>,

    /// 알림 히스토리 보관 개수
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_history: Option<usize>,

    /// 추가 매니페스트 검색 경로
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,

    /// 인라인 서비스 선언
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceManifest>,
}

impl HubConfig {
    pub fn new() -> Self {
        Self {
            version: default_version(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 현재 디렉토리 기준 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_in(&cwd)
    }

    /// `project_root` 기준 글로벌 + 프로젝트 병합 로드
    pub fn load_in(project_root: &Path) -> Result<Self> {
        let layers = ConfigLayer::global()
            .into_iter()
            .chain(std::iter::once(ConfigLayer::project(project_root)));
        Self::load_layers(layers)
    }

    /// 특정 파일에서 로드 (글로벌/프로젝트 레이어는 무시)
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        config.merge(ConfigLayer::explicit(path).read_required::<HubConfig>()?);
        Ok(config)
    }

    fn load_layers(layers: impl IntoIterator<Item = ConfigLayer>) -> Result<Self> {
        let mut config = Self::new();
        for layer in layers {
            if let Some(layer_config) = layer.read::<HubConfig>()? {
                tracing::debug!(
                    layer = layer.kind().as_str(),
                    path = %layer.path().display(),
                    "Config layer loaded"
                );
                config.merge(layer_config);
            }
        }
        Ok(config)
    }

    /// 다른 설정을 병합 (other가 우선)
    pub fn merge(&mut self, other: HubConfig) {
        if other.warn_unknown_language.is_some() {
            self.warn_unknown_language = other.warn_unknown_language;
        }
        if other.notification_history.is_some() {
            self.notification_history = other.notification_history;
        }

        for path in other.search_paths {
            if !self.search_paths.contains(&path) {
                self.search_paths.push(path);
            }
        }

        // 같은 ID는 교체, 새 ID는 추가
        for service in other.services {
            match self.services.iter_mut().find(|s| s.id == service.id) {
                Some(existing) => *existing = service,
                None => self.services.push(service),
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn warn_unknown_language(&self) -> bool {
        self.warn_unknown_language.unwrap_or(true)
    }

    pub fn notification_history(&self) -> usize {
        self.notification_history.unwrap_or(100)
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_service(mut self, service: ServiceManifest) -> Self {
        self.services.push(service);
        self
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn default_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
