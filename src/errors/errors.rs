//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 스키마 정의, 픽스처 시딩, 무결성 검증 전 과정에서 사용하는 통합 에러 타입입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn insert_user(repo: &UserRepository, user: User) -> Result<ObjectId, AppError> {
//!     if user.firebase_uid.is_empty() {
//!         return Err(AppError::ValidationError("firebaseUid is required".to_string()));
//!     }
//!
//!     repo.insert(&user).await
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 셋업 과정에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 어느 단계에서든 에러가 발생하면 남은 순차 단계는 실행되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (연결 실패, 검증기 거부, 중복 키 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 픽스처 또는 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 참조한 문서를 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이미 존재하는 컬렉션/픽스처와의 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 설정값 누락 또는 허용되지 않은 설정 조합
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로세스 종료 코드
    ///
    /// 무결성 위반과 설정 오류를 인프라 오류와 구분할 수 있도록
    /// 카테고리별로 다른 코드를 반환합니다.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigError(_) => 2,
            AppError::ConflictError(_) => 3,
            AppError::ValidationError(_) | AppError::NotFound(_) => 4,
            AppError::DatabaseError(_) | AppError::InternalError(_) => 1,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
