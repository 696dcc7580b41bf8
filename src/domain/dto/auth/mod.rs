pub mod request;
pub mod response;

pub use request::{OAuthCallbackQuery, RefreshTokenRequest};
pub use response::{LoginResponse, OAuthLoginUrlResponse, ProviderTokenResponse};
