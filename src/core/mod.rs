//! Core module - Data model and plumbing shared by every program
//!
//! This module provides:
//! - Result model (datasets, statistics, conversion entries, word tables)
//! - Error taxonomy
//! - Diagnostic sink
//! - Input loading
//! - Path conventions and runtime settings
//! - Text/JSON rendering and the results-file writer

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
