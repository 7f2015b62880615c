//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinic-themed interface for:
//! - Dashboard with system status
//! - Patient measurement entry
//! - Screening result display
//! - Dataset statistics and charts

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::ClinicTheme;
