//! Courses Entity Module
//!
//! 강좌, 레슨, 이론 항목, 연습 문제 엔티티를 정의합니다.

pub mod course;

pub use course::*;
