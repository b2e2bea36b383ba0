//! Services layer - business operations and utilities.
//!
//! This module contains the operations the controller delegates to:
//! - Markdown rendering and the HTML document shell
//! - Editor highlighting styles
//! - Document and export file I/O
//! - Directory listing
//! - Text helpers

pub mod directory;
pub mod file_io;
pub mod highlight;
pub mod markdown;
pub mod text_ops;
