//! Output of a render pass, consumed by the host renderer.

use glimmer_animation::AnimationDriver;
use glimmer_assets::AssetDescriptor;
use glimmer_graphics::Color;

use crate::config::ResizeMode;
use crate::style::Dimension;

/// Bounds of a node. `None` on an axis stretches to the parent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VisualNode {
    /// Solid fill covering the frame.
    Fill {
        frame: Frame,
        color: Color,
        corner_radius: f32,
        opacity: f32,
    },
    /// Groups children inside a frame, optionally clipping them to it.
    Container {
        frame: Frame,
        background: Option<Color>,
        corner_radius: f32,
        clip: bool,
        opacity: f32,
        children: Vec<VisualNode>,
    },
    /// Rotated translucent band of a shimmer placeholder.
    ShimmerBar {
        top: f32,
        width: f32,
        height: f32,
        translate_x: f32,
        rotation_deg: f32,
        color: Color,
        opacity: f32,
        /// Soft shadow around the band, tinted with the highlight.
        glow_color: Color,
        glow_opacity: f32,
        glow_radius: f32,
    },
    /// Centers its child inside the parent frame.
    Centered(Box<VisualNode>),
    /// Host activity indicator.
    Spinner { color: Color },
    /// Node supplied by the caller, passed through untouched.
    Custom { name: String },
    Raster {
        source: AssetDescriptor,
        resize_mode: ResizeMode,
        frame: Frame,
        opacity: f32,
        blur_radius: f32,
        driver: AnimationDriver,
    },
    /// Lays its children out left to right, centered on both axes.
    Row { children: Vec<VisualNode> },
    /// A run of text, shifted vertically by `translate_y`.
    Text {
        text: String,
        font_size: f32,
        bold: bool,
        color: Color,
        translate_y: f32,
        driver: AnimationDriver,
    },
    Vector {
        uri: String,
        width: f32,
        height: f32,
        opacity: f32,
        driver: AnimationDriver,
    },
}

impl VisualNode {
    pub fn custom(name: impl Into<String>) -> Self {
        VisualNode::Custom { name: name.into() }
    }

    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Container { children, .. } | VisualNode::Row { children } => children,
            VisualNode::Centered(child) => std::slice::from_ref(&**child),
            _ => &[],
        }
    }

    /// Depth-first search for the first node matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&VisualNode) -> bool) -> Option<&VisualNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }
}
