//! Config layer - 설정 파일 하나의 위치와 읽기
//!
//! 레이어 순서: 글로벌 → 프로젝트. 명시적 파일(`--config`)은 둘을 대체합니다.

use crate::config::{CONFIG_DIR_NAME, HUB_CONFIG_FILE};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 설정 레이어 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// `<config_dir>/servicehub/config.json`
    Global,
    /// `<project>/.servicehub/config.json`
    Project,
    /// 사용자가 지정한 파일
    Explicit,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Global => "global",
            LayerKind::Project => "project",
            LayerKind::Explicit => "explicit",
        }
    }
}

/// 설정 레이어
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    kind: LayerKind,
    path: PathBuf,
}

impl ConfigLayer {
    /// 글로벌 레이어 - 플랫폼 설정 디렉토리를 모르면 None
    pub fn global() -> Option<Self> {
        let dir = dirs::config_dir()?.join("servicehub");
        Some(Self {
            kind: LayerKind::Global,
            path: dir.join(HUB_CONFIG_FILE),
        })
    }

    /// 프로젝트 레이어
    pub fn project(root: &Path) -> Self {
        Self {
            kind: LayerKind::Project,
            path: root.join(CONFIG_DIR_NAME).join(HUB_CONFIG_FILE),
        }
    }

    /// 명시적 파일
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: LayerKind::Explicit,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 레이어 읽기 - 파일이 없으면 None
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error("read", e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.error("parse", e))
    }

    /// 레이어 읽기 - 파일이 없어도 에러
    pub fn read_required<T: DeserializeOwned>(&self) -> Result<T> {
        self.read()?.ok_or_else(|| {
            Error::Config(format!(
                "{} config {} does not exist",
                self.kind.as_str(),
                self.path.display()
            ))
        })
    }

    fn error(&self, action: &str, cause: impl std::fmt::Display) -> Error {
        Error::Config(format!(
            "Failed to {} {} config {}: {}",
            action,
            self.kind.as_str(),
            self.path.display(),
            cause
        ))
    }
}
