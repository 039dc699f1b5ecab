//! Animation system for Glimmer
//!
//! Provides easing curves, tween specifications and [`AnimationChannel`], a
//! named scalar that is driven by the runtime's frame clock.

mod animation;
mod channel;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use channel::{AnimationChannel, AnimationDriver, AnimationEnd, Repeat};
