//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고, 토큰의 계정 ID로 계정을
//! 다시 조회해서 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣습니다. `web::Data<SessionService>`가 앱에 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::entities::accounts::Role;
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 유효한 토큰이 없으면 401, 역할이 맞지 않으면 403을 응답합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (없으면 인증만 확인)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 역할 무관 인증 미들웨어 생성
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: Role) -> Self {
        Self { required_role: Some(RequiredRole::Single(role)) }
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<Role>) -> Self {
        Self { required_role: Some(RequiredRole::Any(roles)) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
