//! Application state management module.
//!
//! This module contains the core state of the application:
//! - Main `State` struct holding the visible rows and UI flags
//! - `Selector` rows and their spin schedules
//! - Click hitboxes recorded by the renderer
//! - State error handling

mod error;
pub mod hitbox;
mod selector;
mod state_impl;

pub use error::StateError;
pub use hitbox::{ClickTarget, Hitboxes, RowHitbox};
pub use selector::{Selector, Spin, Transition};
pub use state_impl::State;
