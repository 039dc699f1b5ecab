//! Host environment identification and scheduling hooks.

/// Schedules work for the Glimmer runtime.
///
/// Implementations are responsible for waking the host so that it drains
/// frame callbacks and UI tasks. They must be safe to use from multiple
/// threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// The environment the widget tree is running in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Desktop,
    Web,
}

impl Platform {
    /// Platform of the current compilation target.
    pub const fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }

    pub fn is_web(self) -> bool {
        matches!(self, Platform::Web)
    }

    /// Whether the host can interpolate animated properties off the layout
    /// thread. The web target cannot: computed interpolation and rendered
    /// style would drift apart.
    pub fn supports_off_thread_animation(self) -> bool {
        !self.is_web()
    }

    /// Whether the host image element already renders vector markup.
    pub fn renders_vector_natively(self) -> bool {
        self.is_web()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
