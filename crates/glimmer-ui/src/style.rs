//! Declared bounds of the widget.

/// A declared length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Points(f32),
    /// Fraction of the parent, resolved by the host layout pass.
    Percent(f32),
}

impl Dimension {
    pub fn points(&self) -> Option<f32> {
        match *self {
            Dimension::Points(value) => Some(value),
            Dimension::Percent(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageStyle {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub corner_radius: f32,
}

impl ImageStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(Dimension::Points(width));
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(Dimension::Points(height));
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn width_percent(mut self, percent: f32) -> Self {
        self.width = Some(Dimension::Percent(percent));
        self
    }

    pub fn height_percent(mut self, percent: f32) -> Self {
        self.height = Some(Dimension::Percent(percent));
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn explicit_width(&self) -> Option<f32> {
        self.width.and_then(|width| width.points())
    }

    pub fn explicit_height(&self) -> Option<f32> {
        self.height.and_then(|height| height.points())
    }

    /// Both sides are declared in points, so layout measurement is unneeded.
    pub fn has_explicit_size(&self) -> bool {
        self.explicit_width().is_some() && self.explicit_height().is_some()
    }
}
