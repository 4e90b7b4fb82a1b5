//! Session Feedback
//!
//! The fixed diagnostic tag catalog and the per-session feedback generator.

pub mod catalog;
pub mod generator;
