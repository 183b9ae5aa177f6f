//! TUI module for the widget dashboard.
//!
//! Provides a terminal user interface built on ratatui and crossterm that
//! renders the dashboard's categories as card grids, with a search box and
//! an add-widget modal.

pub mod app;
pub mod event;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, TuiSettings};
