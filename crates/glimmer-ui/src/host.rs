//! Contract with the host raster and vector renderers.

use glimmer_assets::AssetDescriptor;
use glimmer_core::LoadSender;

use crate::config::ResizeMode;

/// What the widget asks the host to decode.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadRequest {
    Raster {
        source: AssetDescriptor,
        resize_mode: ResizeMode,
    },
    Vector {
        uri: String,
        width: f32,
        height: f32,
    },
}

/// Host renderers that fetch and decode assets.
///
/// Implementations resolve `signal` exactly once, from a later turn of the
/// event loop, when decoding succeeds or fails. A cancelled signal may be
/// dropped or resolved; either way the widget ignores it.
pub trait ImageHost {
    fn request(&mut self, request: LoadRequest, signal: LoadSender);
}
