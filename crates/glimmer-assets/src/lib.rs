//! Asset identity, classification and the "already loaded" cache.

mod cache;
mod classify;
mod descriptor;

pub use cache::{GlobalLoadCache, LoadCache, LocalLoadCache};
pub use classify::{classify, RenderKind};
pub use descriptor::{AssetDescriptor, AssetIdentity, AssetKind, AssetValue, ResourceHandle};
