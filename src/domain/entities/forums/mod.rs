//! Forums Entity Module

pub mod forum_post;

pub use forum_post::*;
