//! # Configuration Module
//!
//! 셋업 도구의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스 연결, 실행 환경, 시딩 옵션
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` 파일을 읽고,
//! `ENVIRONMENT` 값으로 개발/테스트/스테이징/프로덕션을 구분합니다.
//!
//! ### 2. 안전한 기본값
//!
//! - 연결 정보는 로컬 개발 서버를 기본값으로 사용
//! - 프로덕션에서는 `--reset`에 `--force`가 함께 필요
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="LEARN"
//! export MONGODB_APP_NAME="learn_setup"
//! export ENVIRONMENT="development"  # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;
