//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`state`] - 리포지토리와 서비스를 생성하고 `web::Data` 핸들로 묶는 애플리케이션 상태
//!
//! 서비스는 전역 레지스트리 없이 생성자로 의존성을 전달받습니다.
//! 저장소 계층은 트레이트 객체(`Arc<dyn AccountStore>` 등)로 주입되므로
//! 테스트에서는 인메모리 구현으로 교체할 수 있습니다.

pub mod state;

pub use state::AppState;
