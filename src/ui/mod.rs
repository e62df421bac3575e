//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout of header, rows, log panel and footer
//! - Theme management
//! - Widget components (reel, spinner, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::{ColorSpec, Theme};
