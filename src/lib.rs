//! A slot-machine style random idea generator for the terminal.
//!
//! Each configured category (Theme, Genre, ...) is shown as a reel that spins
//! through its options and lands on a random one.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
