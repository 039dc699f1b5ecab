//! Named, frame-clock driven scalar values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glimmer_core::{FrameCallbackRegistration, FrameClock, Platform};

use crate::animation::{AnimationSpec, Lerp};

/// Where the host interpolates animated properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationDriver {
    /// Interpolated by the host compositor, off the layout thread.
    Compositor,
    /// Interpolated on the same thread as layout.
    Layout,
}

impl AnimationDriver {
    pub fn for_platform(platform: Platform) -> Self {
        if platform.supports_off_thread_animation() {
            AnimationDriver::Compositor
        } else {
            AnimationDriver::Layout
        }
    }
}

/// How a run ended. Reported exactly once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The value settled at its target.
    Finished,
    /// The run was stopped or replaced before settling.
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Restart from the initial value after every cycle until stopped.
    Forever,
}

type EndCallback = Box<dyn FnOnce(AnimationEnd) + 'static>;

struct ActiveRun {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    repeat: Repeat,
    start_time_nanos: Option<u64>,
    on_end: Option<EndCallback>,
}

struct ChannelInner {
    name: &'static str,
    clock: FrameClock,
    driver: AnimationDriver,
    value: f32,
    run: Option<ActiveRun>,
    registration: Option<FrameCallbackRegistration>,
    stop_count: u32,
}

/// A named scalar with explicit start/stop control.
///
/// Cloning yields another handle to the same channel.
#[derive(Clone)]
pub struct AnimationChannel {
    inner: Rc<RefCell<ChannelInner>>,
}

impl AnimationChannel {
    pub fn new(name: &'static str, initial: f32, clock: FrameClock, driver: AnimationDriver) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                name,
                clock,
                driver,
                value: initial,
                run: None,
                registration: None,
                stop_count: 0,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.borrow().name
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn driver(&self) -> AnimationDriver {
        self.inner.borrow().driver
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().run.is_some()
    }

    /// Number of times [`AnimationChannel::stop`] actually halted a run.
    pub fn stop_count(&self) -> u32 {
        self.inner.borrow().stop_count
    }

    /// Animates from the current value to `target` once.
    pub fn animate_to(
        &self,
        target: f32,
        spec: AnimationSpec,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        let from = self.value();
        self.start(from, target, spec, Repeat::Once, Some(Box::new(on_end)));
    }

    /// Animates `from -> to` over `spec`, snapping back to `from` after every
    /// cycle, until [`AnimationChannel::stop`] is called.
    pub fn start_loop(&self, from: f32, to: f32, spec: AnimationSpec) {
        self.start(from, to, spec, Repeat::Forever, None);
    }

    /// Halts the active run, leaving the value wherever it currently is.
    /// Returns `false` when nothing was running.
    pub fn stop(&self) -> bool {
        let on_end = {
            let mut inner = self.inner.borrow_mut();
            let Some(mut run) = inner.run.take() else {
                return false;
            };
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.stop_count += 1;
            log::trace!("{} stopped at {}", inner.name, inner.value);
            run.on_end.take()
        };
        if let Some(on_end) = on_end {
            on_end(AnimationEnd::Interrupted);
        }
        true
    }

    /// Jumps to `value`, interrupting any active run.
    pub fn snap_to(&self, value: f32) {
        let interrupted = self.take_run();
        self.inner.borrow_mut().value = value;
        if let Some(on_end) = interrupted {
            on_end(AnimationEnd::Interrupted);
        }
    }

    fn take_run(&self) -> Option<EndCallback> {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.run.take().and_then(|mut run| run.on_end.take())
    }

    fn start(
        &self,
        from: f32,
        to: f32,
        spec: AnimationSpec,
        repeat: Repeat,
        on_end: Option<EndCallback>,
    ) {
        let interrupted = self.take_run();
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = from;
            inner.run = Some(ActiveRun {
                from,
                to,
                spec,
                repeat,
                start_time_nanos: None,
                on_end,
            });
            log::trace!("{} started {from} -> {to} ({repeat:?})", inner.name);
        }
        if let Some(previous) = interrupted {
            previous(AnimationEnd::Interrupted);
        }
        Self::schedule_frame(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<ChannelInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.run.is_none() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<ChannelInner>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let mut finished = None;
        {
            let mut guard = this.borrow_mut();
            let inner = &mut *guard;
            inner.registration = None;
            let Some(run) = inner.run.as_mut() else {
                return;
            };

            let start = *run.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start);
            let delay = run.spec.delay_nanos();
            if elapsed < delay {
                schedule_next = true;
            } else {
                let active = elapsed - delay;
                let duration = run.spec.duration_nanos();
                match run.repeat {
                    Repeat::Once => {
                        let linear = (active as f64 / duration as f64).min(1.0) as f32;
                        if linear >= 1.0 {
                            inner.value = run.to;
                            finished = Some(run.on_end.take());
                        } else {
                            inner.value = run.from.lerp(&run.to, run.spec.easing.transform(linear));
                            schedule_next = true;
                        }
                    }
                    Repeat::Forever => {
                        let phase = (active % duration) as f64 / duration as f64;
                        inner.value = run
                            .from
                            .lerp(&run.to, run.spec.easing.transform(phase as f32));
                        schedule_next = true;
                    }
                }
            }
            if finished.is_some() {
                inner.run = None;
                log::trace!("{} settled at {}", inner.name, inner.value);
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(Some(on_end)) = finished {
            on_end(AnimationEnd::Finished);
        }
    }
}

impl fmt::Debug for AnimationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AnimationChannel")
            .field("name", &inner.name)
            .field("value", &inner.value)
            .field("running", &inner.run.is_some())
            .field("driver", &inner.driver)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/channel_tests.rs"]
mod tests;
