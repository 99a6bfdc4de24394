//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션마다 하나의 리포지토리가 있으며, 모두 공유 [`Database`](crate::db::Database)
//! 핸들을 `Arc`로 보관합니다. 드라이버 에러는 `AppError::DatabaseError`로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{Repository, users::UserRepository};
//!
//! let users = UserRepository::new(database.clone());
//! let id = users.insert(&student).await?;
//! users.set_relations(id, &[teacher_id], &[teacher_id]).await?;
//! ```

pub mod repository;
pub mod users;
pub mod courses;
pub mod catalog;

pub use repository::*;
