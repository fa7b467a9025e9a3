//! Input helpers for front ends that poll pointer state each frame.

pub mod click;

pub use click::ClickTracker;
