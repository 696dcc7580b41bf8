//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 소셜 로그인, 세션, 관리자 기능 전반에서 공유하는 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 일관된 JSON 응답(`{"error": "..."}`)으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(store: &dyn AccountStore, id: &str) -> Result<Account, AppError> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
//! }
//! ```

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 인프라 에러에 대해 클라이언트가 받는 메시지
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// MongoDB 드라이버 에러를 변환합니다.
    ///
    /// 유니크 인덱스 위반(E11000)은 `ConflictError`로, 나머지는 `DatabaseError`로 매핑됩니다.
    pub fn from_mongo(err: mongodb::error::Error, conflict_message: &str) -> Self {
        if is_duplicate_key(&err) {
            AppError::ConflictError(conflict_message.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 인프라 에러(DB, Redis, 외부 서비스, 내부)는 상세 내용을 로그에만 남기고
    /// 클라이언트에는 일반 메시지를 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::DatabaseError(_)
            | AppError::RedisError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => {
                log::error!("{}", self);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
