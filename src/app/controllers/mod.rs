//! Controllers layer - orchestration between services and widgets.
//!
//! - Markdown preview rendering
//! - Editor highlighting

pub mod highlight;
pub mod preview;
