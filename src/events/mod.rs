//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Clock events: periodic ticks that drive the spin animations
//! - Terminal events: key presses, mouse clicks and redraw ticks

pub mod clock;
pub mod terminal;
