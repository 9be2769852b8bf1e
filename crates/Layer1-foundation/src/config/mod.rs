//! Config - 통합 설정 관리
//!
//! - `hub.rs` - HubConfig 통합 설정 + ServiceManifest

mod hub;

pub use hub::{HubConfig, ServiceManifest, CONFIG_DIR_NAME, HUB_CONFIG_FILE};
