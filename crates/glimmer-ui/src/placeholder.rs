//! Placeholder presentations.

use glimmer_graphics::Color;

use crate::config::{LoadingIndicator, PlaceholderMode, ShimmerParams};
use crate::node::{Frame, VisualNode};

/// Height used for the shimmer band when the container height is unknown.
pub const FALLBACK_PLACEHOLDER_HEIGHT: f32 = 64.0;

/// Opacity of the shimmer band on top of its highlight alpha.
const SHIMMER_BAR_OPACITY: f32 = 0.8;

/// Opacity of the glow cast by the shimmer band.
const SHIMMER_GLOW_OPACITY: f32 = 0.5;

/// Resolved size of the widget, from style or layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaceholderGeometry {
    pub frame: Frame,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub corner_radius: f32,
}

/// Horizontal offset of the shimmer band at sweep fraction `t`.
///
/// Runs from `-bar_width` at `t = 0` to `container_width + bar_width` at
/// `t = 1`, so the band enters and leaves fully outside the clip.
pub fn sweep_offset(t: f32, container_width: f32, bar_width: f32) -> f32 {
    -bar_width + t * (container_width + 2.0 * bar_width)
}

/// Builds the placeholder node for `mode`.
///
/// Returns `None` for a shimmer whose width is not known yet; the caller
/// renders again once layout has reported a size.
pub fn render_placeholder(
    mode: &PlaceholderMode,
    geometry: &PlaceholderGeometry,
    fill: Color,
    sweep: f32,
    opacity: f32,
) -> Option<VisualNode> {
    match mode {
        PlaceholderMode::Solid => Some(VisualNode::Fill {
            frame: geometry.frame,
            color: fill,
            corner_radius: geometry.corner_radius,
            opacity,
        }),
        PlaceholderMode::Shimmer(params) => {
            let width = geometry.width.filter(|width| *width > 0.0)?;
            let height = geometry.height.unwrap_or(FALLBACK_PLACEHOLDER_HEIGHT);
            Some(VisualNode::Container {
                frame: geometry.frame,
                background: Some(fill),
                corner_radius: geometry.corner_radius,
                clip: true,
                opacity,
                children: vec![shimmer_bar(params, width, height, sweep, geometry.corner_radius)],
            })
        }
        PlaceholderMode::Icon(indicator) => {
            let icon = match indicator {
                LoadingIndicator::Spinner { color } => VisualNode::Spinner { color: *color },
                LoadingIndicator::Custom(node) => (**node).clone(),
            };
            Some(VisualNode::Container {
                frame: geometry.frame,
                background: Some(fill),
                corner_radius: geometry.corner_radius,
                clip: false,
                opacity,
                children: vec![VisualNode::Centered(Box::new(icon))],
            })
        }
    }
}

fn shimmer_bar(
    params: &ShimmerParams,
    width: f32,
    height: f32,
    sweep: f32,
    corner_radius: f32,
) -> VisualNode {
    let highlight = Color::WHITE.with_alpha(params.intensity);
    VisualNode::ShimmerBar {
        top: -params.width / 2.0,
        width: params.width,
        height: height + params.width,
        translate_x: sweep_offset(sweep, width, params.width),
        rotation_deg: params.angle_deg,
        color: highlight,
        opacity: SHIMMER_BAR_OPACITY,
        glow_color: highlight,
        glow_opacity: SHIMMER_GLOW_OPACITY,
        glow_radius: corner_radius,
    }
}

#[cfg(test)]
#[path = "tests/placeholder_tests.rs"]
mod tests;
