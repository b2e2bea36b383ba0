//! Domain layer - core data structures and types.
//!
//! - Document (the associated file and its dirty state)
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;

pub use document::{APP_NAME, Document};
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, ThemeMode};
