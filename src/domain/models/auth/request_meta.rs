//! 감사 기록용 요청자 정보

use std::future::{ready, Ready};
use actix_web::{http::header, Error, FromRequest, HttpRequest};

/// 요청자의 네트워크 주소와 User-Agent
///
/// 프록시 뒤에서는 `Forwarded`/`X-Forwarded-For` 헤더의 값을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let ip_address = req
            .connection_info()
            .realip_remote_addr()
            .map(str::to_string);

        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self { ip_address, user_agent }
    }
}

impl FromRequest for RequestMeta {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(RequestMeta::from_http_request(req)))
    }
}
