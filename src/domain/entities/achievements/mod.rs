//! Achievements Entity Module
//!
//! 업적 엔티티와 마일스톤 카탈로그를 정의합니다.

pub mod achievement;
pub mod milestone;

pub use achievement::*;
pub use milestone::*;
