//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Error types
//! - The word index model (letter -> word -> count)
//! - The byte scanner that splits input into words
//! - Rendering functions for different output formats
//! - Timing utilities

pub mod error;
pub mod model;
pub mod render;
pub mod scanner;
pub mod util;
