//! Service - 서비스 인터페이스와 라이프사이클 상태 모델
//!
//! - `state.rs` - 상태 열거와 합법적 전이
//! - `traits.rs` - 컨트롤러가 소비하는 `Service` 트레이트
//! - `base.rs` - 서비스 구현용 공통 상태 관리 (`ServiceCore`)
//! - `process.rs` - 외부 프로세스 기반 서비스 (`ProcessService`)

mod base;
mod process;
mod state;
mod traits;

pub use base::ServiceCore;
pub use process::ProcessService;
pub use state::ServiceState;
pub use traits::{ReadyCallback, Service};
