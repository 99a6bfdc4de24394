//! 데이터 및 실행 환경 설정 관리 모듈
//!
//! 데이터베이스 연결, 실행 환경, 시딩 옵션 관련 설정을 관리합니다.

use std::env;

use crate::errors::{AppError, AppResult};

/// 기본 MongoDB 연결 URI
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// 기본 데이터베이스 이름
pub const DEFAULT_DATABASE_NAME: &str = "LEARN";

/// 기본 애플리케이션 이름 (MongoDB 서버 로그에 표시됨)
pub const DEFAULT_APP_NAME: &str = "learn_setup";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - 파괴적인 작업(reset)은 명시적 강제가 필요
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: 연결 URI (기본값: `mongodb://localhost:27017`)
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: `LEARN`)
/// - `MONGODB_APP_NAME`: 클라이언트 애플리케이션 이름 (기본값: `learn_setup`)
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
}

impl DatabaseConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급하고 기본값을 사용합니다.
    /// URI가 `mongodb://` 또는 `mongodb+srv://`로 시작하지 않으면 에러를 반환합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            uri: read("MONGODB_URI", DEFAULT_MONGODB_URI),
            database_name: read("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            app_name: read("MONGODB_APP_NAME", DEFAULT_APP_NAME),
        };
        config.validate()?;
        Ok(config)
    }

    /// 커맨드라인 인자로 URI와 데이터베이스 이름을 덮어씁니다.
    pub fn with_overrides(mut self, uri: Option<String>, database_name: Option<String>) -> AppResult<Self> {
        if let Some(uri) = uri {
            self.uri = uri;
        }
        if let Some(name) = database_name {
            self.database_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.uri.starts_with("mongodb://") || self.uri.starts_with("mongodb+srv://")) {
            return Err(AppError::ConfigError(format!(
                "MONGODB_URI must start with mongodb:// or mongodb+srv://, got '{}'",
                self.uri
            )));
        }
        if self.database_name.is_empty() || self.database_name.contains(['/', '\\', '.', ' ', '"', '$']) {
            return Err(AppError::ConfigError(format!(
                "invalid database name '{}'",
                self.database_name
            )));
        }
        Ok(())
    }
}

/// 시딩 실행 옵션
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedConfig {
    /// 기존 픽스처가 있으면 시딩 전에 문서를 비웁니다.
    pub reset: bool,
    /// 프로덕션 환경에서도 reset을 허용합니다.
    pub force: bool,
}

impl SeedConfig {
    /// 현재 환경에서 이 옵션 조합이 허용되는지 확인합니다.
    pub fn check_allowed(&self, env: &Environment) -> AppResult<()> {
        if self.force && !self.reset {
            return Err(AppError::ConfigError("--force only applies together with --reset".to_string()));
        }
        if self.reset && env.is_production() && !self.force {
            return Err(AppError::ConfigError(
                "refusing to reset collections in production without --force".to_string(),
            ));
        }
        Ok(())
    }
}
