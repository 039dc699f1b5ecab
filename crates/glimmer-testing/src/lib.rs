//! Testing utilities and harness for Glimmer

mod host;
mod rule;

pub use host::{PendingLoad, RecordingHost};
pub use rule::{ImageTestRule, PumpError, FRAME_INTERVAL_NANOS};

pub mod prelude {
    pub use crate::host::{PendingLoad, RecordingHost};
    pub use crate::rule::{ImageTestRule, PumpError};
}
