//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key names to game actions)
//! - Frame scheduling (animation frames on web, a manual pump on native)

pub mod input;
pub mod schedule;

pub use input::{Action, KeyState};
pub use schedule::{FrameHandle, FrameScheduler, ManualScheduler};
