//! Flows module - End-to-end commands built from the core pieces
//!
//! Provides:
//! - count: scan one file and print its word frequency report

pub mod count;
