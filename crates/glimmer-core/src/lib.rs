//! Core runtime for Glimmer.
//!
//! Everything here runs on the host's UI thread: frame callbacks are drained
//! once per frame, UI tasks are drained on the event loop, and load signals
//! from host renderers are funneled through the UI task queue so they are
//! never observed synchronously by the code that requested the load.

mod frame_clock;
mod load_signal;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use load_signal::{load_channel, LoadReceiver, LoadResult, LoadSender, LoadSubscription};
pub use platform::{Platform, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
