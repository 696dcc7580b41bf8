//! JWT 세션 발급 서비스
//!
//! 해석된 계정을 세션 참조(HS256 액세스/리프레시 토큰 쌍)로 바꿉니다.
//! 토큰에는 계정 ID만 의미 있게 쓰이며, 역할은 요청마다 저장소에서 다시 읽습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::entities::accounts::Account;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenType};
use crate::errors::{AppError, ErrorContext};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_hours: i64,
    refresh_days: i64,
}

/// 액세스 토큰 수명 상한 (30일)
const MAX_ACCESS_HOURS: i64 = 24 * 30;
/// 리프레시 토큰 수명 상한 (1년)
const MAX_REFRESH_DAYS: i64 = 365;

fn clamp_lifetime(name: &str, value: i64, max: i64) -> i64 {
    let clamped = value.clamp(1, max);
    if clamped != value {
        log::warn!("{} 값 {}이(가) 허용 범위(1..={})를 벗어나 {}(으)로 조정합니다", name, value, max, clamped);
    }
    clamped
}

impl TokenService {
    /// 수명은 1 이상, 상한 이하로 조정됩니다.
    pub fn new(secret: &str, access_hours: i64, refresh_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_hours: clamp_lifetime("JWT_EXPIRATION_HOURS", access_hours, MAX_ACCESS_HOURS),
            refresh_days: clamp_lifetime("JWT_REFRESH_EXPIRATION_DAYS", refresh_days, MAX_REFRESH_DAYS),
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS`, `JWT_REFRESH_EXPIRATION_DAYS`로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            &JwtConfig::secret(),
            JwtConfig::expiration_hours(),
            JwtConfig::refresh_expiration_days(),
        )
    }

    fn generate_token(&self, account: &Account, token_type: TokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let lifetime = match token_type {
            TokenType::Access => Duration::hours(self.access_hours),
            TokenType::Refresh => Duration::days(self.refresh_days),
        };

        let claims = TokenClaims {
            sub: account.id_string().ok_or_else(|| {
                AppError::InternalError("계정 ID가 없습니다".to_string())
            })?,
            role: account.role,
            token_type,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("JWT 토큰 생성 실패")
    }

    pub fn generate_token_pair(&self, account: &Account) -> Result<TokenPair, AppError> {
        let access_token = self.generate_token(account, TokenType::Access)?;
        let refresh_token = self.generate_token(account, TokenType::Refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_hours * 3600,
        })
    }

    fn verify_token(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AppError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.token_type != expected {
            return Err(AppError::AuthenticationError("토큰 용도가 올바르지 않습니다".to_string()));
        }

        Ok(claims)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_token(token, TokenType::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_token(token, TokenType::Refresh)
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};
    use crate::domain::entities::accounts::Role;

    fn account(role: Role) -> Account {
        Account {
            id: Some(ObjectId::new()),
            email: Some("ann@example.com".to_string()),
            name: "Ann".to_string(),
            avatar: None,
            is_verified: true,
            role,
            google_id: Some("g1".to_string()),
            facebook_id: None,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    fn service() -> TokenService {
        TokenService::new("test-secret", 1, 7)
    }

    #[test]
    fn test_token_pair_round_trip() {
        let service = service();
        let account = account(Role::Manager);

        let pair = service.generate_token_pair(&account).unwrap();
        assert_eq!(pair.expires_in, 3600);

        let claims = service.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, account.id_string().unwrap());
        assert_eq!(claims.role, Role::Manager);

        let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert!(refresh.exp > claims.exp);
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let service = service();
        let pair = service.generate_token_pair(&account(Role::Customer)).unwrap();

        assert!(matches!(
            service.verify_refresh_token(&pair.access_token),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.verify_access_token(&pair.refresh_token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let pair = TokenService::new("other", 1, 7)
            .generate_token_pair(&account(Role::Customer))
            .unwrap();

        assert!(service().verify_access_token(&pair.access_token).is_err());
        assert!(service().verify_access_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_unsaved_account_cannot_get_tokens() {
        let mut unsaved = account(Role::Customer);
        unsaved.id = None;
        assert!(matches!(
            service().generate_token_pair(&unsaved),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();
        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }

    #[test]
    fn test_extreme_lifetimes_are_clamped() {
        let service = TokenService::new("test-secret", i64::MAX, i64::MAX);
        let pair = service.generate_token_pair(&account(Role::Customer)).unwrap();
        assert_eq!(pair.expires_in, MAX_ACCESS_HOURS * 3600);

        let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert!(refresh.exp - refresh.iat <= MAX_REFRESH_DAYS * 24 * 3600);

        let floor = TokenService::new("test-secret", -5, 0);
        let pair = floor.generate_token_pair(&account(Role::Customer)).unwrap();
        assert_eq!(pair.expires_in, 3600);
        assert!(floor.verify_access_token(&pair.access_token).is_ok());
    }
}
