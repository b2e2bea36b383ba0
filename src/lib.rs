//! Markpane - a minimal markdown editor with a live HTML preview.

pub mod app;
pub mod ui;
