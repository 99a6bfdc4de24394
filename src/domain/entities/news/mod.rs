//! News Entity Module

pub mod news_post;

pub use news_post::*;
