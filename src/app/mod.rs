//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Document, settings and messages
//! - `controllers/` - Preview rendering and editor highlighting
//! - `services/` - Markdown, file I/O, directory listing, text helpers
//! - `infrastructure/` - Platform detection and error types
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, FontChoice, Message, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
