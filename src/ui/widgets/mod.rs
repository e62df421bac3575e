//! Reusable UI widget components.
//!
//! This module contains the reel widget, the spinner glyphs and styling
//! utilities.

pub mod reel;
pub mod spinner;
pub mod styling;
