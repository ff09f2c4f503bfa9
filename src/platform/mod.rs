//! Platform abstraction layer
//!
//! Host-side helpers that keep the simulation free of wall clocks and
//! pointer geometry:
//! - Time source for pursuit pacing
//! - Touch/drag translation into discrete moves

pub mod input;
pub mod time;

pub use input::{BoardLayout, drag_direction};
pub use time::{Clock, ManualClock, SystemClock};
