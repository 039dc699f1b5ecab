//! Placeholder-backed image widget for Glimmer
//!
//! [`ImageView`] shows a placeholder (solid, shimmer or loading icon) until
//! the host has decoded the image, then cross-fades to it. Assets that have
//! already loaded once skip the placeholder on later mounts. [`DancingText`]
//! is a bouncing text label for loading states.

mod config;
mod dancing_text;
mod host;
mod image_view;
mod layout_measurer;
mod node;
mod placeholder;
mod style;
mod transition;

pub use config::*;
pub use dancing_text::{
    bounce_offset, DancingText, DancingTextConfig, TextStyle, DEFAULT_LETTERS,
};
pub use host::{ImageHost, LoadRequest};
pub use image_view::{ImageContext, ImageView, LoadState};
pub use layout_measurer::LayoutMeasurer;
pub use node::{Frame, VisualNode};
pub use placeholder::{
    render_placeholder, sweep_offset, PlaceholderGeometry, FALLBACK_PLACEHOLDER_HEIGHT,
};
pub use style::{Dimension, ImageStyle};
pub use transition::TransitionController;

pub mod prelude {
    pub use crate::config::{ImageViewConfig, PlaceholderStyle, ResizeMode};
    pub use crate::host::{ImageHost, LoadRequest};
    pub use crate::image_view::{ImageContext, ImageView, LoadState};
    pub use crate::node::VisualNode;
    pub use crate::style::ImageStyle;
    pub use glimmer_assets::{AssetDescriptor, AssetKind, ResourceHandle};
    pub use glimmer_graphics::{Color, Size};
}
