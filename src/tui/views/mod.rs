//! View components for the TUI.

pub mod dashboard;
pub mod modal;
