//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`date_utils`] - 고정 픽스처 날짜 변환
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::date_utils::utc_date;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let completed = utc_date("2025-10-15")?;
//! print_boxed_title("LEARN SETUP");
//! ```

pub mod date_utils;
pub mod display_terminal;
