//! The image widget and its load-lifecycle state machine.
//!
//! ```text
//! Idle --mount--> Loading --success--> Loaded
//!   |               |
//!   |               +--failure--> Errored
//!   +--mount (cached)--> Loaded
//! ```
//!
//! `Loaded` and `Errored` are terminal: later signals are ignored. A missing
//! source or kind keeps the widget `Idle` and renders the flat fallback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glimmer_animation::AnimationDriver;
use glimmer_assets::{classify, AssetDescriptor, GlobalLoadCache, LoadCache, RenderKind};
use glimmer_core::{load_channel, LoadResult, LoadSubscription, Platform, RuntimeHandle};
use glimmer_graphics::Size;

use crate::config::{ImageViewConfig, PlaceholderMode};
use crate::host::{ImageHost, LoadRequest};
use crate::layout_measurer::LayoutMeasurer;
use crate::node::{Frame, VisualNode};
use crate::placeholder::render_placeholder;
use crate::transition::TransitionController;

/// Blur applied to the raster until the fade-in has finished.
const PRE_REVEAL_BLUR_RADIUS: f32 = 3.0;

/// Vector renderer size used when the style does not declare one.
const DEFAULT_VECTOR_SIZE: f32 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Services supplied by the composition root.
#[derive(Clone)]
pub struct ImageContext {
    runtime: RuntimeHandle,
    platform: Platform,
    cache: Rc<dyn LoadCache>,
}

impl ImageContext {
    /// Context for the current platform backed by the process-wide cache.
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            platform: Platform::current(),
            cache: Rc::new(GlobalLoadCache),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_cache(mut self, cache: Rc<dyn LoadCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }
}

struct ImageViewInner {
    config: ImageViewConfig,
    context: ImageContext,
    descriptor: Option<AssetDescriptor>,
    render_kind: RenderKind,
    state: LoadState,
    cached: bool,
    fading: bool,
    revealed: bool,
    notified: bool,
    mounted: bool,
    defunct: bool,
    error: Option<String>,
    measurer: LayoutMeasurer,
    subscription: Option<LoadSubscription>,
}

enum SignalAction {
    Ignore,
    Reveal { duration_ms: u64, fade_placeholder: bool },
    Fail,
}

/// An image shown behind a placeholder until it has decoded.
///
/// Events arrive from the host on the UI thread: [`ImageView::mount`],
/// [`ImageView::on_layout`], load signals through the runtime's UI queue,
/// frame ticks, and finally [`ImageView::unmount`].
pub struct ImageView {
    inner: Rc<RefCell<ImageViewInner>>,
    transitions: Rc<TransitionController>,
}

impl ImageView {
    pub fn new(config: ImageViewConfig, context: ImageContext) -> Self {
        let descriptor = config.descriptor();
        let render_kind = descriptor
            .as_ref()
            .map(|d| classify(&d.value, d.kind, context.platform))
            .unwrap_or(RenderKind::Raster);
        let driver = AnimationDriver::for_platform(context.platform);
        let transitions = TransitionController::new(context.runtime.frame_clock(), driver);
        Self {
            inner: Rc::new(RefCell::new(ImageViewInner {
                config,
                context,
                descriptor,
                render_kind,
                state: LoadState::Idle,
                cached: false,
                fading: false,
                revealed: false,
                notified: false,
                mounted: false,
                defunct: false,
                error: None,
                measurer: LayoutMeasurer::new(),
                subscription: None,
            })),
            transitions: Rc::new(transitions),
        }
    }

    /// Requests the asset from `host` and starts the placeholder.
    ///
    /// Without a source or kind nothing is requested. Mounting twice, or
    /// after unmount, is ignored.
    pub fn mount(&self, host: &mut dyn ImageHost) {
        let (request, shimmer_speed) = {
            let mut inner = self.inner.borrow_mut();
            if inner.mounted || inner.defunct {
                log::debug!("ignoring repeated mount");
                return;
            }
            inner.mounted = true;
            let Some(descriptor) = inner.descriptor.clone() else {
                log::debug!("no asset configured, rendering fallback fill");
                return;
            };

            let mut shimmer_speed = None;
            if inner.context.cache.has(&descriptor.identity()) {
                inner.state = LoadState::Loaded;
                inner.cached = true;
                log::debug!("{} already loaded, skipping placeholder", descriptor.identity());
            } else {
                inner.state = LoadState::Loading;
                if let PlaceholderMode::Shimmer(params) = &inner.config.placeholder {
                    shimmer_speed = Some(params.speed_ms);
                }
            }
            (inner.load_request(descriptor), shimmer_speed)
        };

        if let Some(speed_ms) = shimmer_speed {
            self.transitions.start_shimmer(speed_ms);
        }

        let runtime = self.inner.borrow().context.runtime.clone();
        let (sender, receiver) = load_channel(runtime);
        let inner = Rc::downgrade(&self.inner);
        let transitions = Rc::downgrade(&self.transitions);
        let subscription = receiver.subscribe(move |result| {
            if let (Some(inner), Some(transitions)) = (inner.upgrade(), transitions.upgrade()) {
                Self::on_load_result(&inner, &transitions, result);
            }
        });
        self.inner.borrow_mut().subscription = Some(subscription);
        host.request(request, sender);
    }

    /// Feeds a host layout report to the measurer.
    pub fn on_layout(&self, size: Size) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if inner.defunct {
            return;
        }
        inner.measurer.on_layout(&inner.config.style, size);
    }

    /// Marks the widget defunct, stops listening for load signals and stops
    /// the shimmer. The host fetch itself is left alone.
    pub fn unmount(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.defunct {
                return;
            }
            inner.defunct = true;
            if let Some(subscription) = inner.subscription.take() {
                subscription.cancel();
            }
        }
        if self.transitions.is_shimmering() {
            self.transitions.stop_shimmer();
        }
        log::debug!("image view unmounted");
    }

    /// Builds the node tree for the current state and animation values.
    pub fn render(&self) -> VisualNode {
        let inner = self.inner.borrow();
        let style = inner.config.style;
        let frame = Frame {
            width: style.width,
            height: style.height,
        };
        let Some(descriptor) = inner.descriptor.as_ref() else {
            return inner.fallback(frame);
        };
        if inner.state == LoadState::Errored {
            return inner.fallback(frame);
        }

        let mut children = Vec::with_capacity(2);
        if !inner.cached && !inner.revealed {
            let geometry = inner.measurer.resolve(&style);
            if let Some(placeholder) = render_placeholder(
                &inner.config.placeholder,
                &geometry,
                inner.config.placeholder_color,
                self.transitions.sweep(),
                self.transitions.placeholder_opacity(),
            ) {
                children.push(placeholder);
            }
        }

        let opacity = self.transitions.image_opacity();
        let driver = self.transitions.driver();
        children.push(match (inner.render_kind, descriptor.value.as_uri()) {
            (RenderKind::Vector, Some(uri)) => VisualNode::Vector {
                uri: uri.to_string(),
                width: style.explicit_width().unwrap_or(DEFAULT_VECTOR_SIZE),
                height: style.explicit_height().unwrap_or(DEFAULT_VECTOR_SIZE),
                opacity,
                driver,
            },
            _ => VisualNode::Raster {
                source: descriptor.clone(),
                resize_mode: inner.config.resize_mode,
                frame,
                opacity,
                blur_radius: if inner.revealed {
                    0.0
                } else {
                    PRE_REVEAL_BLUR_RADIUS
                },
                driver,
            },
        });

        VisualNode::Container {
            frame,
            background: None,
            corner_radius: style.corner_radius,
            clip: false,
            opacity: 1.0,
            children,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.inner.borrow().state
    }

    /// The asset was already in the load cache when mounted.
    pub fn is_cached(&self) -> bool {
        self.inner.borrow().cached
    }

    /// The fade-in has completed and the placeholder is gone.
    pub fn is_revealed(&self) -> bool {
        self.inner.borrow().revealed
    }

    pub fn is_unmounted(&self) -> bool {
        self.inner.borrow().defunct
    }

    pub fn error(&self) -> Option<String> {
        self.inner.borrow().error.clone()
    }

    pub fn descriptor(&self) -> Option<AssetDescriptor> {
        self.inner.borrow().descriptor.clone()
    }

    pub fn render_kind(&self) -> RenderKind {
        self.inner.borrow().render_kind
    }

    pub fn measured_size(&self) -> Size {
        self.inner.borrow().measurer.measured()
    }

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    fn on_load_result(
        inner_rc: &Rc<RefCell<ImageViewInner>>,
        transitions: &Rc<TransitionController>,
        result: LoadResult,
    ) {
        let action = {
            let mut inner = inner_rc.borrow_mut();
            inner.signal_action(result)
        };

        match action {
            SignalAction::Ignore => {}
            SignalAction::Fail => {
                transitions.stop_shimmer();
            }
            SignalAction::Reveal {
                duration_ms,
                fade_placeholder,
            } => {
                if fade_placeholder {
                    transitions.play_placeholder_fade_out(duration_ms);
                }
                let inner = Rc::downgrade(inner_rc);
                let weak_transitions = Rc::downgrade(transitions);
                transitions.play_image_fade_in(duration_ms, move || {
                    Self::on_revealed(&inner, &weak_transitions);
                });
            }
        }
    }

    fn on_revealed(inner: &Weak<RefCell<ImageViewInner>>, transitions: &Weak<TransitionController>) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let callback = {
            let mut inner = inner.borrow_mut();
            if inner.defunct {
                log::debug!("fade-in finished after unmount");
                return;
            }
            inner.fading = false;
            inner.revealed = true;
            if inner.notified {
                None
            } else {
                inner.notified = true;
                inner.config.on_image_loaded.clone()
            }
        };
        if let Some(transitions) = transitions.upgrade() {
            if transitions.is_shimmering() {
                transitions.stop_shimmer();
            }
        }
        if let Some(callback) = callback {
            callback(true);
        }
    }
}

impl ImageViewInner {
    fn fallback(&self, frame: Frame) -> VisualNode {
        VisualNode::Fill {
            frame,
            color: self.config.placeholder_color,
            corner_radius: self.config.style.corner_radius,
            opacity: 1.0,
        }
    }

    fn load_request(&self, descriptor: AssetDescriptor) -> LoadRequest {
        let style = &self.config.style;
        match (self.render_kind, descriptor.value.as_uri()) {
            (RenderKind::Vector, Some(uri)) => LoadRequest::Vector {
                uri: uri.to_string(),
                width: style.explicit_width().unwrap_or(DEFAULT_VECTOR_SIZE),
                height: style.explicit_height().unwrap_or(DEFAULT_VECTOR_SIZE),
            },
            _ => LoadRequest::Raster {
                source: descriptor,
                resize_mode: self.config.resize_mode,
            },
        }
    }

    fn signal_action(&mut self, result: LoadResult) -> SignalAction {
        if self.defunct {
            log::debug!("ignoring load {result} after unmount");
            return SignalAction::Ignore;
        }
        let reveal = SignalAction::Reveal {
            duration_ms: self.config.transition_duration_ms,
            fade_placeholder: self.config.placeholder.fades_out(),
        };
        match (self.state, result) {
            (LoadState::Loading, LoadResult::Success) => {
                if let Some(descriptor) = &self.descriptor {
                    self.context.cache.insert(descriptor.identity());
                }
                self.state = LoadState::Loaded;
                self.fading = true;
                reveal
            }
            (LoadState::Loaded, LoadResult::Success)
                if self.cached && !self.fading && !self.revealed =>
            {
                self.fading = true;
                reveal
            }
            (LoadState::Loading, LoadResult::Failure(reason))
            | (LoadState::Loaded, LoadResult::Failure(reason))
                if !self.revealed && !self.fading =>
            {
                log::warn!("image load failed: {reason}");
                self.state = LoadState::Errored;
                self.error = Some(reason);
                SignalAction::Fail
            }
            (state, result) => {
                log::debug!("ignoring load {result} in {state:?}");
                SignalAction::Ignore
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/image_view_tests.rs"]
mod tests;
