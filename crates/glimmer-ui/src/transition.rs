//! The three timed values behind an image view.

use glimmer_animation::{AnimationChannel, AnimationDriver, AnimationEnd, AnimationSpec, Easing};
use glimmer_core::FrameClock;

pub struct TransitionController {
    image_opacity: AnimationChannel,
    placeholder_sweep: AnimationChannel,
    placeholder_opacity: AnimationChannel,
    driver: AnimationDriver,
}

impl TransitionController {
    /// All channels share `driver`, so a web host never mixes layout-thread
    /// and compositor-driven values on one widget.
    pub fn new(clock: FrameClock, driver: AnimationDriver) -> Self {
        Self {
            image_opacity: AnimationChannel::new("imageOpacity", 0.0, clock.clone(), driver),
            placeholder_sweep: AnimationChannel::new("placeholderSweep", 0.0, clock.clone(), driver),
            placeholder_opacity: AnimationChannel::new("placeholderOpacity", 1.0, clock, driver),
            driver,
        }
    }

    pub fn driver(&self) -> AnimationDriver {
        self.driver
    }

    /// Loops the sweep `0 -> 1` linearly over `speed_ms`, snapping back to 0
    /// after each pass, until [`TransitionController::stop_shimmer`].
    pub fn start_shimmer(&self, speed_ms: u64) {
        self.placeholder_sweep
            .start_loop(0.0, 1.0, AnimationSpec::linear(speed_ms));
    }

    /// Stops the sweep where it is. Returns `false` if it was not running.
    pub fn stop_shimmer(&self) -> bool {
        self.placeholder_sweep.stop()
    }

    pub fn is_shimmering(&self) -> bool {
        self.placeholder_sweep.is_running()
    }

    pub fn shimmer_stop_count(&self) -> u32 {
        self.placeholder_sweep.stop_count()
    }

    /// Fades the image in with an ease-out curve.
    ///
    /// `on_complete` runs once the opacity has settled at 1.0. It does not
    /// run if the fade is interrupted.
    pub fn play_image_fade_in(&self, duration_ms: u64, on_complete: impl FnOnce() + 'static) {
        self.image_opacity.snap_to(0.0);
        self.image_opacity.animate_to(
            1.0,
            AnimationSpec::tween(duration_ms, Easing::EaseOutQuad),
            move |end| match end {
                AnimationEnd::Finished => on_complete(),
                AnimationEnd::Interrupted => log::debug!("image fade-in interrupted"),
            },
        );
    }

    pub fn play_placeholder_fade_out(&self, duration_ms: u64) {
        self.placeholder_opacity.animate_to(
            0.0,
            AnimationSpec::tween(duration_ms, Easing::EaseOutQuad),
            |_| {},
        );
    }

    pub fn image_opacity(&self) -> f32 {
        self.image_opacity.value()
    }

    pub fn sweep(&self) -> f32 {
        self.placeholder_sweep.value()
    }

    pub fn placeholder_opacity(&self) -> f32 {
        self.placeholder_opacity.value()
    }

    pub fn image_opacity_channel(&self) -> &AnimationChannel {
        &self.image_opacity
    }

    pub fn placeholder_sweep_channel(&self) -> &AnimationChannel {
        &self.placeholder_sweep
    }

    pub fn placeholder_opacity_channel(&self) -> &AnimationChannel {
        &self.placeholder_opacity
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
