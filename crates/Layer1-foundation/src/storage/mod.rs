//! Storage module for ServiceHub
//!
//! - `layer`: 설정 레이어 (글로벌 / 프로젝트 / 명시적 파일) 읽기

mod layer;

pub use layer::{ConfigLayer, LayerKind};
