pub mod schema_repo;

pub use schema_repo::*;
