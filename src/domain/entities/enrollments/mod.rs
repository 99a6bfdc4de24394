//! Enrollments Entity Module

pub mod enrolled_course;

pub use enrolled_course::*;
