//! # Collection Schemas
//!
//! 7개 검증 컬렉션의 `$jsonSchema` 정의와 재실행 시 작업 결정 로직입니다.
//! 이 모듈은 데이터베이스에 접근하지 않습니다.

pub mod validators;
pub mod action;

pub use validators::*;
pub use action::*;

/// `users.firebaseUid` 고유 인덱스 이름
pub const FIREBASE_UID_INDEX: &str = "firebaseUid_unique";
