//! Statistics Entity Module

pub mod teacher_statistics;

pub use teacher_statistics::*;
