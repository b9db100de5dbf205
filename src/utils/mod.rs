//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and PNG I/O used by the
//! facade and the command-line front end.

pub mod logger;
pub(crate) mod progress;
pub mod png_utils;
