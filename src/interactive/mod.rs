//! Interactive TUI interface
//!
//! Slice Mode in the terminal with ratatui.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
