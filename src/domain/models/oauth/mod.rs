//! # OAuth Domain Models Module
//!
//! 외부 인증 프로바이더에서 받은 사용자 정보를 다루는 모델들입니다.
//!
//! 프로바이더별 코드는 응답을 받아서 [`ExternalProfile`]로 옮기는 데까지만 관여하고,
//! 그 이후의 정규화와 계정 해석은 프로바이더와 무관하게 동작합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! oauth/
//! ├── mod.rs            ← 이 파일 (모듈 진입점)
//! ├── profile.rs        ← ExternalProfile, ProviderProfile (정규화)
//! ├── google_user.rs    ← Google UserInfo 응답
//! └── facebook_user.rs  ← Facebook Graph API 응답
//! ```

pub mod profile;
pub mod google_user;
pub mod facebook_user;

pub use profile::*;
pub use google_user::GoogleUserInfo;
pub use facebook_user::{FacebookUserInfo, FACEBOOK_PROFILE_FIELDS};
