pub mod seed_report;
pub mod seed_service;

pub use seed_report::*;
pub use seed_service::*;
