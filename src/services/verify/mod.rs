pub mod integrity;
pub mod integrity_service;

pub use integrity::*;
pub use integrity_service::*;
