//! One-shot completion channel between a host renderer and a widget.
//!
//! The host receives a [`LoadSender`] and resolves it exactly once, since
//! both `succeed` and `fail` consume it. Resolution is queued on the runtime's
//! UI task queue, so the receiving side never observes it inside the call
//! that handed the sender out. Cancelling the receiving side turns any later
//! resolution into a no-op.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use crate::runtime::RuntimeHandle;

/// Outcome reported by a host renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadResult {
    Success,
    Failure(String),
}

impl LoadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadResult::Success)
    }
}

impl fmt::Display for LoadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadResult::Success => write!(f, "success"),
            LoadResult::Failure(reason) => write!(f, "failure: {reason}"),
        }
    }
}

type Listener = Box<dyn FnOnce(LoadResult) + 'static>;

#[derive(Default)]
struct SignalSlot {
    result: Option<LoadResult>,
    listener: Option<Listener>,
    waker: Option<Waker>,
    cancelled: bool,
    closed: bool,
}

impl SignalSlot {
    fn wake(&mut self) {
        if let Some(waker) = self.waker.take() {
            waker.wake();
        }
    }
}

/// Creates a connected sender/receiver pair bound to `runtime`.
pub fn load_channel(runtime: RuntimeHandle) -> (LoadSender, LoadReceiver) {
    let slot = Rc::new(RefCell::new(SignalSlot::default()));
    (
        LoadSender {
            slot: Rc::clone(&slot),
            runtime: runtime.clone(),
            resolved: false,
        },
        LoadReceiver { slot, runtime },
    )
}

fn deliver(slot: &Rc<RefCell<SignalSlot>>, result: LoadResult) {
    let listener = {
        let mut state = slot.borrow_mut();
        if state.cancelled {
            log::debug!("load signal ({result}) arrived after cancellation");
            return;
        }
        match state.listener.take() {
            Some(listener) => listener,
            None => {
                state.result = Some(result);
                state.wake();
                return;
            }
        }
    };
    listener(result);
}

/// Resolving half, handed to the host renderer.
pub struct LoadSender {
    slot: Rc<RefCell<SignalSlot>>,
    runtime: RuntimeHandle,
    resolved: bool,
}

impl LoadSender {
    pub fn succeed(self) {
        self.send(LoadResult::Success);
    }

    pub fn fail(self, reason: impl Into<String>) {
        self.send(LoadResult::Failure(reason.into()));
    }

    pub fn send(mut self, result: LoadResult) {
        self.resolved = true;
        if self.slot.borrow().cancelled {
            log::debug!("load signal ({result}) dropped: receiver cancelled");
            return;
        }
        let slot = Rc::clone(&self.slot);
        self.runtime
            .enqueue_ui_task(Box::new(move || deliver(&slot, result)));
    }

    /// Whether the receiving side has stopped listening.
    pub fn is_cancelled(&self) -> bool {
        self.slot.borrow().cancelled
    }
}

impl Drop for LoadSender {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }
        let mut state = self.slot.borrow_mut();
        state.closed = true;
        state.wake();
    }
}

/// Receiving half. Either await it as a future or attach a listener with
/// [`LoadReceiver::subscribe`].
pub struct LoadReceiver {
    slot: Rc<RefCell<SignalSlot>>,
    runtime: RuntimeHandle,
}

impl LoadReceiver {
    /// Routes the result to `listener` instead of the future.
    pub fn subscribe(self, listener: impl FnOnce(LoadResult) + 'static) -> LoadSubscription {
        let early = {
            let mut state = self.slot.borrow_mut();
            match state.result.take() {
                Some(result) => Some((result, listener)),
                None => {
                    state.listener = Some(Box::new(listener));
                    None
                }
            }
        };
        if let Some((result, listener)) = early {
            let slot = Rc::clone(&self.slot);
            self.runtime.enqueue_ui_task(Box::new(move || {
                if !slot.borrow().cancelled {
                    listener(result);
                }
            }));
        }
        LoadSubscription {
            slot: Rc::clone(&self.slot),
        }
    }

    pub fn cancel(&self) {
        cancel_slot(&self.slot);
    }
}

impl Future for LoadReceiver {
    type Output = Option<LoadResult>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.slot.borrow_mut();
        if let Some(result) = state.result.take() {
            return Poll::Ready(Some(result));
        }
        if state.cancelled || state.closed {
            return Poll::Ready(None);
        }
        state.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

/// Handle kept by the subscriber so it can stop listening.
pub struct LoadSubscription {
    slot: Rc<RefCell<SignalSlot>>,
}

impl LoadSubscription {
    pub fn cancel(&self) {
        cancel_slot(&self.slot);
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.borrow().cancelled
    }
}

fn cancel_slot(slot: &Rc<RefCell<SignalSlot>>) {
    let mut state = slot.borrow_mut();
    state.cancelled = true;
    state.listener = None;
    state.result = None;
    state.wake();
}

#[cfg(test)]
#[path = "tests/load_signal_tests.rs"]
mod tests;
