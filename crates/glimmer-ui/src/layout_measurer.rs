use glimmer_graphics::Size;

use crate::node::Frame;
use crate::placeholder::PlaceholderGeometry;
use crate::style::ImageStyle;

/// Remembers the realized size reported by the host layout pass.
///
/// Each axis is fixed by the first report that is positive on that axis, so
/// a pass that has not sized the width yet does not hide a later one that
/// has. Only consulted for axes the style does not declare in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutMeasurer {
    width: Option<f32>,
    height: Option<f32>,
}

impl LayoutMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the positive axes of `size` that are still unknown, unless the
    /// style declares both sides. Returns whether anything was recorded.
    pub fn on_layout(&mut self, style: &ImageStyle, size: Size) -> bool {
        if style.has_explicit_size() {
            return false;
        }
        let mut recorded = false;
        for (slot, value) in [(&mut self.width, size.width), (&mut self.height, size.height)] {
            if slot.is_none() && value > 0.0 {
                *slot = Some(value);
                recorded = true;
            }
        }
        if recorded {
            log::trace!("measured {:?}x{:?}", self.width, self.height);
        }
        recorded
    }

    /// Measured size, zero on axes not reported yet.
    pub fn measured(&self) -> Size {
        Size::new(self.width.unwrap_or(0.0), self.height.unwrap_or(0.0))
    }

    /// Resolves the widget geometry: explicit style values first, then the
    /// measurement.
    pub fn resolve(&self, style: &ImageStyle) -> PlaceholderGeometry {
        PlaceholderGeometry {
            frame: Frame {
                width: style.width,
                height: style.height,
            },
            width: style.explicit_width().or(self.width),
            height: style.explicit_height().or(self.height),
            corner_radius: style.corner_radius,
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_measurer_tests.rs"]
mod tests;
