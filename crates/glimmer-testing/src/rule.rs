use std::fmt;
use std::rc::Rc;

use glimmer_assets::LocalLoadCache;
use glimmer_core::{Platform, Runtime, RuntimeHandle};
use glimmer_ui::{ImageContext, ImageView, ImageViewConfig};

use crate::host::RecordingHost;

/// ~60 FPS.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const MAX_IDLE_FRAMES: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PumpError {
    /// Work was still pending after the frame budget ran out, e.g. a
    /// shimmer loop that was never stopped.
    NeverIdle { frames: usize },
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PumpError::NeverIdle { frames } => {
                write!(f, "runtime still busy after {frames} frames")
            }
        }
    }
}

impl std::error::Error for PumpError {}

/// Drives image views the way a host would: one runtime, a recording host,
/// an isolated load cache and a manual frame clock.
pub struct ImageTestRule {
    runtime: Runtime,
    host: RecordingHost,
    cache: LocalLoadCache,
    platform: Platform,
    frame_time_nanos: u64,
}

impl ImageTestRule {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::default(),
            host: RecordingHost::new(),
            cache: LocalLoadCache::new(),
            platform: Platform::Android,
            frame_time_nanos: 0,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn cache(&self) -> &LocalLoadCache {
        &self.cache
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut RecordingHost {
        &mut self.host
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn context(&self) -> ImageContext {
        ImageContext::new(self.runtime.handle())
            .with_platform(self.platform)
            .with_cache(Rc::new(self.cache.clone()))
    }

    /// Creates a view sharing this rule's cache and mounts it.
    pub fn mount(&mut self, config: ImageViewConfig) -> ImageView {
        let view = ImageView::new(config, self.context());
        view.mount(&mut self.host);
        view
    }

    /// Runs queued UI tasks, then one frame.
    pub fn advance_frame(&mut self) {
        let handle = self.runtime.handle();
        handle.drain_ui();
        handle.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
    }

    pub fn advance_time_by(&mut self, millis: u64) {
        let frames = (millis * 1_000_000).div_ceil(FRAME_INTERVAL_NANOS);
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Advances frames until nothing is queued. Returns the frame count.
    pub fn pump_until_idle(&mut self) -> Result<usize, PumpError> {
        for frames in 0..MAX_IDLE_FRAMES {
            if !self.runtime.needs_frame() {
                return Ok(frames);
            }
            self.advance_frame();
        }
        Err(PumpError::NeverIdle {
            frames: MAX_IDLE_FRAMES,
        })
    }
}

impl Default for ImageTestRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_ui::{LoadState, PlaceholderStyle};

    fn config(placeholder: PlaceholderStyle) -> ImageViewConfig {
        ImageViewConfig::builder()
            .link("https://x.io/rule.png")
            .placeholder(placeholder)
            .build()
            .expect("valid config")
    }

    #[test]
    fn advance_time_rounds_up_to_whole_frames() {
        let mut rule = ImageTestRule::new();
        rule.advance_time_by(100);
        assert_eq!(rule.frame_time_nanos(), 6 * FRAME_INTERVAL_NANOS);
    }

    #[test]
    fn running_shimmer_never_idles() {
        let mut rule = ImageTestRule::new();
        let _view = rule.mount(config(PlaceholderStyle::Shimmer));
        assert_eq!(
            rule.pump_until_idle(),
            Err(PumpError::NeverIdle {
                frames: MAX_IDLE_FRAMES
            })
        );
    }

    #[test]
    fn views_share_the_rule_cache() {
        let mut rule = ImageTestRule::new();
        let first = rule.mount(config(PlaceholderStyle::Solid));
        rule.host_mut().succeed(0);
        rule.pump_until_idle().expect("fade settles");
        assert_eq!(first.load_state(), LoadState::Loaded);
        assert_eq!(rule.cache().len(), 1);

        let second = rule.mount(config(PlaceholderStyle::Solid));
        assert!(second.is_cached());
    }
}
