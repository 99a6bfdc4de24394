//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 공유 [`Database`](crate::db::Database) 핸들로 필요한 리포지토리를 만들고,
//! 순수 도메인 함수(검증기 계획, 픽스처, 통계 계산, 무결성 검사)를 데이터베이스 작업과 연결합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{schema::SchemaService, seed::SeedService, verify::IntegrityService};
//!
//! SchemaService::new(db.clone()).define_all().await?;
//! SeedService::new(db.clone(), Environment::current()).run(&options).await?;
//! let report = IntegrityService::new(db).run().await?;
//! ```

pub mod schema;
pub mod seed;
pub mod verify;
pub mod statistics;
