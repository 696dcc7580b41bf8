//! 인증된 사용자 컨텍스트
//!
//! `AuthMiddleware`가 세션 참조를 계정으로 되돌린 뒤 요청 확장(extensions)에 넣는 값입니다.
//! 핸들러는 추출자(extractor)로 받아서 사용합니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     Ok(HttpResponse::Ok().json(json!({ "id": user.account_id })))
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::{Account, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub account_id: String,

    pub email: Option<String>,

    /// 요청 시점에 저장소에서 읽은 현재 역할
    pub role: Role,
}

impl AuthenticatedUser {
    /// 저장된 계정으로부터 컨텍스트를 만듭니다. ID가 없는 계정은 `None`.
    pub fn from_account(account: &Account) -> Option<Self> {
        Some(Self {
            account_id: account.id_string()?,
            email: account.email.clone(),
            role: account.role,
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
