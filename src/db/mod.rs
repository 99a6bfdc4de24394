//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()?).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use log::info;
use mongodb::{Client, bson::doc, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 대상 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에 컬렉션 핸들을 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConfigError(format!("invalid MongoDB URI: {}", e)))?;

        // 애플리케이션 이름 설정 (서버 측 로그에서 식별용)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("ping failed: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
