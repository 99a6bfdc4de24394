//! LEARN 데이터베이스 셋업 도구
//!
//! 수어 학습 플랫폼 LEARN의 MongoDB 데이터베이스를 준비합니다.
//!
//! # Features
//!
//! - **스키마 정의**: 7개 컬렉션을 `$jsonSchema` 검증기와 함께 생성하고 `users.firebaseUid` 고유 인덱스 생성
//! - **픽스처 시딩**: 샘플 사용자, 업적, 강좌, 수강 기록, 소식, 포럼 글, 교사 통계를 순서대로 삽입
//! - **무결성 검증**: 컬렉션 간 참조와 레슨 순서 규칙 검사
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │       CLI       │ ← schema / seed / verify / setup
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 단계 순서와 ID 연결
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 컬렉션 단위 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use learn_setup::config::{DatabaseConfig, Environment, SeedConfig};
//! use learn_setup::db::Database;
//! use learn_setup::services::seed::SeedService;
//!
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()?).await?);
//! let report = SeedService::new(database, Environment::current())
//!     .run(&SeedConfig::default())
//!     .await?;
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod errors;
