//! Users Entity Module
//!
//! 사용자 도메인 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserInformation};
//! use crate::domain::entities::flags::UserRole;
//!
//! let info = UserInformation::new(0, DateTime::now(), (0, 0), (1, 1));
//! let user = User::new("firebase-uid", UserRole::Student, "Carlos", info);
//! ```

pub mod user;

pub use user::*;
