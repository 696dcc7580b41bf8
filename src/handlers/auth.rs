//! # 인증 핸들러
//!
//! 소셜 로그인 시작/콜백, 토큰 갱신, 현재 계정 조회를 처리합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | GET | `/api/v1/auth/{provider}/login` | 없음 |
//! | GET | `/api/v1/auth/{provider}/callback` | 없음 |
//! | POST | `/api/v1/auth/refresh` | 리프레시 토큰 (본문 또는 쿠키) |
//! | GET | `/api/v1/auth/me` | Bearer |

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::{AuthProvider, Environment};
use crate::domain::dto::accounts::AccountResponse;
use crate::domain::dto::auth::{LoginResponse, OAuthCallbackQuery, RefreshTokenRequest};
use crate::domain::models::auth::{AuthenticatedUser, RequestMeta};
use crate::domain::models::token::TokenPair;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::accounts::AccountService;
use crate::services::auth::oauth_service::AUTHENTICATION_FAILED;
use crate::services::auth::{OAuthService, SessionService};

const REFRESH_COOKIE: &str = "refresh_token";

fn parse_provider(raw: &str) -> Result<AuthProvider, AppError> {
    AuthProvider::from_str(raw).map_err(AppError::ValidationError)
}

/// 리프레시 토큰을 HttpOnly 쿠키로도 내려줍니다.
fn refresh_cookie(tokens: &TokenPair) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE, tokens.refresh_token.clone())
        .path("/api/v1/auth")
        .http_only(true)
        .secure(Environment::current().is_production())
        .same_site(SameSite::Lax)
        .finish()
}

#[get("/{provider}/login")]
pub async fn oauth_login_url(
    path: web::Path<String>,
    oauth: web::Data<OAuthService>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;
    let url_response = oauth.login_url(provider).await?;

    Ok(HttpResponse::Ok().json(url_response))
}

#[get("/{provider}/callback")]
pub async fn oauth_callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    requester: RequestMeta,
    oauth: web::Data<OAuthService>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;
    oauth.ensure_enabled(provider)?;

    if let Some(error) = &query.error {
        log::warn!(
            "{} OAuth 에러: {} - {}",
            provider,
            error,
            query.error_description.as_deref().unwrap_or("OAuth 인증이 취소되었거나 실패했습니다")
        );
        return Err(AppError::AuthenticationError(AUTHENTICATION_FAILED.to_string()));
    }

    if let Err(e) = query.validate() {
        log::warn!("{} OAuth 콜백 파라미터 오류: {}", provider, e);
        return Err(AppError::AuthenticationError(AUTHENTICATION_FAILED.to_string()));
    }

    let account = oauth
        .authenticate_with_code(provider, &query.code, &query.state, &requester)
        .await?;

    let tokens = sessions.tokens().generate_token_pair(&account)?;
    let cookie = refresh_cookie(&tokens);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(LoginResponse { tokens, account: AccountResponse::from(account) }))
}

#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    let (account, tokens) = sessions.refresh(&refresh_token).await?;

    log::info!("토큰 갱신 성공: 계정 ID {}", account.id_string().unwrap_or_default());

    let cookie = refresh_cookie(&tokens);
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(LoginResponse { tokens, account: AccountResponse::from(account) }))
}

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_current_account(
    user: AuthenticatedUser,
    accounts: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = accounts.get_account(&user.account_id).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// 본문 → 쿠키 순서로 리프레시 토큰을 찾습니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    if let Some(body) = body {
        body.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        return Ok(body.refresh_token.clone());
    }

    req.cookie(REFRESH_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::AuthenticationError("리프레시 토큰이 제공되지 않았습니다".to_string()))
}
