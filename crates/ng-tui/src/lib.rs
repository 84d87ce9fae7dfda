//! ng-tui: Terminal UI for numguess
//!
//! This crate provides a ratatui-based terminal interface for the game.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use theme::Theme;
