mod all;
mod footer;
mod header;
mod log;
mod rows;

use self::log::log;
use super::*;
use footer::footer;
use header::header;
use rows::rows;

pub use all::all as render;
