use glimmer_core::LoadSender;
use glimmer_ui::{ImageHost, LoadRequest};

/// A load the host has accepted but not resolved yet.
pub struct PendingLoad {
    pub request: LoadRequest,
    signal: Option<LoadSender>,
}

impl PendingLoad {
    pub fn is_resolved(&self) -> bool {
        self.signal.is_none()
    }

    /// Whether the widget stopped listening for this load.
    pub fn is_cancelled(&self) -> bool {
        self.signal
            .as_ref()
            .map(|signal| signal.is_cancelled())
            .unwrap_or(false)
    }
}

/// Host that records every request and lets the test decide the outcome.
#[derive(Default)]
pub struct RecordingHost {
    loads: Vec<PendingLoad>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    pub fn load(&self, index: usize) -> Option<&PendingLoad> {
        self.loads.get(index)
    }

    pub fn requests(&self) -> impl Iterator<Item = &LoadRequest> + '_ {
        self.loads.iter().map(|load| &load.request)
    }

    /// Reports a successful decode for load `index`. Returns `false` if
    /// there is no such load or it was already resolved.
    pub fn succeed(&mut self, index: usize) -> bool {
        match self.take_signal(index) {
            Some(signal) => {
                signal.succeed();
                true
            }
            None => false,
        }
    }

    pub fn fail(&mut self, index: usize, reason: &str) -> bool {
        match self.take_signal(index) {
            Some(signal) => {
                signal.fail(reason);
                true
            }
            None => false,
        }
    }

    pub fn succeed_all(&mut self) -> usize {
        (0..self.loads.len())
            .filter(|index| self.succeed(*index))
            .count()
    }

    fn take_signal(&mut self, index: usize) -> Option<LoadSender> {
        self.loads.get_mut(index).and_then(|load| load.signal.take())
    }
}

impl ImageHost for RecordingHost {
    fn request(&mut self, request: LoadRequest, signal: LoadSender) {
        log::trace!("host received {request:?}");
        self.loads.push(PendingLoad {
            request,
            signal: Some(signal),
        });
    }
}
