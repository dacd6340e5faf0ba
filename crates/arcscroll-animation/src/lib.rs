//! Easing curves for ArcScroll
//!
//! Pull progress is shaped by the same cubic bezier curves the platform
//! animation APIs expose. Only the curve evaluation lives here; there is no
//! animation clock.

mod easing;

pub use easing::{CubicBezier, Easing};
