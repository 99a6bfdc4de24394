//! # Domain Layer Module
//!
//! LEARN 데이터베이스의 문서 구조, 컬렉션 검증기, 시드 픽스처를 정의합니다.
//! 이 계층은 데이터베이스에 접근하지 않으며 모든 함수는 순수 함수입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 컬렉션 문서 구조체와 파생 규칙
//! ├── schemas   - `$jsonSchema` 검증기와 재실행 작업 결정
//! └── fixtures  - 시더가 삽입하는 샘플 문서
//!      │
//!      ▼
//! Services (schema / seed / verify / statistics)
//!      │
//!      ▼
//! Repositories, DB
//! ```

pub mod entities;
pub mod schemas;
pub mod fixtures;
