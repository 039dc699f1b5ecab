//! Widget configuration.
//!
//! Every option has a documented default. Values are checked once by
//! [`ImageViewConfigBuilder::build`]; a built config is always renderable.

use std::fmt;
use std::rc::Rc;

use glimmer_assets::{AssetDescriptor, AssetKind, AssetValue};
use glimmer_graphics::Color;

use crate::node::VisualNode;
use crate::style::{Dimension, ImageStyle};

pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 300;
pub const DEFAULT_SHIMMER_ANGLE_DEG: f32 = 15.0;
pub const DEFAULT_SHIMMER_WIDTH: f32 = 20.0;
pub const DEFAULT_SHIMMER_SPEED_MS: u64 = 1300;
pub const DEFAULT_SHIMMER_INTENSITY: f32 = 0.55;

/// How the raster renderer fits the bitmap into the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    Repeat,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShimmerParams {
    pub angle_deg: f32,
    pub width: f32,
    pub speed_ms: u64,
    pub intensity: f32,
}

impl Default for ShimmerParams {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_SHIMMER_ANGLE_DEG,
            width: DEFAULT_SHIMMER_WIDTH,
            speed_ms: DEFAULT_SHIMMER_SPEED_MS,
            intensity: DEFAULT_SHIMMER_INTENSITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadingIndicator {
    Spinner { color: Color },
    Custom(Box<VisualNode>),
}

/// Placeholder presentation shown until the image is revealed.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceholderMode {
    Solid,
    Shimmer(ShimmerParams),
    Icon(LoadingIndicator),
}

impl PlaceholderMode {
    /// Whether the placeholder fades out alongside the image fade-in.
    pub fn fades_out(&self) -> bool {
        !matches!(self, PlaceholderMode::Shimmer(_))
    }
}

/// Selector used by the builder; resolved into a [`PlaceholderMode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    Solid,
    #[default]
    Shimmer,
    Icon,
}

pub type ImageLoadedCallback = Rc<dyn Fn(bool)>;

#[derive(Clone)]
pub struct ImageViewConfig {
    pub kind: Option<AssetKind>,
    pub source: Option<AssetValue>,
    pub resize_mode: ResizeMode,
    pub style: ImageStyle,
    pub on_image_loaded: Option<ImageLoadedCallback>,
    pub placeholder: PlaceholderMode,
    pub placeholder_color: Color,
    pub transition_duration_ms: u64,
}

impl ImageViewConfig {
    pub fn builder() -> ImageViewConfigBuilder {
        ImageViewConfigBuilder::default()
    }

    /// The asset to load, when both kind and source were supplied.
    pub fn descriptor(&self) -> Option<AssetDescriptor> {
        match (self.kind, &self.source) {
            (Some(kind), Some(value)) => Some(AssetDescriptor::new(kind, value.clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for ImageViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageViewConfig")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .field("resize_mode", &self.resize_mode)
            .field("style", &self.style)
            .field("on_image_loaded", &self.on_image_loaded.is_some())
            .field("placeholder", &self.placeholder)
            .field("placeholder_color", &self.placeholder_color)
            .field("transition_duration_ms", &self.transition_duration_ms)
            .finish()
    }
}

#[derive(Clone)]
pub struct ImageViewConfigBuilder {
    kind: Option<AssetKind>,
    source: Option<AssetValue>,
    resize_mode: ResizeMode,
    style: ImageStyle,
    on_image_loaded: Option<ImageLoadedCallback>,
    placeholder_style: PlaceholderStyle,
    placeholder_color: Color,
    transition_duration_ms: u64,
    shimmer: ShimmerParams,
    loading_icon: Option<VisualNode>,
    spinner_color: Color,
}

impl Default for ImageViewConfigBuilder {
    fn default() -> Self {
        Self {
            kind: None,
            source: None,
            resize_mode: ResizeMode::default(),
            style: ImageStyle::default(),
            on_image_loaded: None,
            placeholder_style: PlaceholderStyle::default(),
            placeholder_color: Color::PLACEHOLDER_GRAY,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            shimmer: ShimmerParams::default(),
            loading_icon: None,
            spinner_color: Color::SPINNER_GRAY,
        }
    }
}

impl ImageViewConfigBuilder {
    pub fn kind(mut self, kind: AssetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn source(mut self, source: impl Into<AssetValue>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Shorthand for `kind(Link).source(uri)`.
    pub fn link(self, uri: impl Into<String>) -> Self {
        self.kind(AssetKind::Link).source(AssetValue::Uri(uri.into()))
    }

    pub fn descriptor(mut self, descriptor: AssetDescriptor) -> Self {
        self.kind = Some(descriptor.kind);
        self.source = Some(descriptor.value);
        self
    }

    pub fn resize_mode(mut self, resize_mode: ResizeMode) -> Self {
        self.resize_mode = resize_mode;
        self
    }

    pub fn style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_image_loaded(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.on_image_loaded = Some(Rc::new(callback));
        self
    }

    pub fn placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    pub fn transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn shimmer_angle_deg(mut self, angle: f32) -> Self {
        self.shimmer.angle_deg = angle;
        self
    }

    pub fn shimmer_width(mut self, width: f32) -> Self {
        self.shimmer.width = width;
        self
    }

    pub fn shimmer_speed_ms(mut self, speed_ms: u64) -> Self {
        self.shimmer.speed_ms = speed_ms;
        self
    }

    pub fn shimmer_intensity(mut self, intensity: f32) -> Self {
        self.shimmer.intensity = intensity;
        self
    }

    pub fn loading_icon(mut self, icon: VisualNode) -> Self {
        self.loading_icon = Some(icon);
        self
    }

    pub fn spinner_color(mut self, color: Color) -> Self {
        self.spinner_color = color;
        self
    }

    pub fn build(self) -> Result<ImageViewConfig, ConfigError> {
        validate_style(&self.style)?;
        let shimmer = self.shimmer;
        if !(shimmer.width.is_finite() && shimmer.width > 0.0) {
            return Err(ConfigError::ShimmerWidth(shimmer.width));
        }
        if shimmer.speed_ms == 0 {
            return Err(ConfigError::ShimmerSpeed);
        }
        if !(0.0..=1.0).contains(&shimmer.intensity) {
            return Err(ConfigError::ShimmerIntensity(shimmer.intensity));
        }
        if !shimmer.angle_deg.is_finite() {
            return Err(ConfigError::ShimmerAngle(shimmer.angle_deg));
        }

        let placeholder = match self.placeholder_style {
            PlaceholderStyle::Solid => PlaceholderMode::Solid,
            PlaceholderStyle::Shimmer => PlaceholderMode::Shimmer(shimmer),
            PlaceholderStyle::Icon => PlaceholderMode::Icon(match self.loading_icon {
                Some(icon) => LoadingIndicator::Custom(Box::new(icon)),
                None => LoadingIndicator::Spinner {
                    color: self.spinner_color,
                },
            }),
        };

        Ok(ImageViewConfig {
            kind: self.kind,
            source: self.source,
            resize_mode: self.resize_mode,
            style: self.style,
            on_image_loaded: self.on_image_loaded,
            placeholder,
            placeholder_color: self.placeholder_color,
            transition_duration_ms: self.transition_duration_ms,
        })
    }
}

fn validate_style(style: &ImageStyle) -> Result<(), ConfigError> {
    let check = |field: &'static str, value: f32| {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Style { field, value })
        }
    };
    check("corner_radius", style.corner_radius)?;
    for (field, dimension) in [("width", style.width), ("height", style.height)] {
        match dimension {
            Some(Dimension::Points(value)) | Some(Dimension::Percent(value)) => {
                check(field, value)?
            }
            None => {}
        }
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ShimmerWidth(f32),
    ShimmerSpeed,
    ShimmerIntensity(f32),
    ShimmerAngle(f32),
    Style { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ShimmerWidth(width) => {
                write!(f, "shimmer width must be a positive number, got {width}")
            }
            ConfigError::ShimmerSpeed => write!(f, "shimmer speed must be at least 1ms"),
            ConfigError::ShimmerIntensity(intensity) => {
                write!(f, "shimmer intensity must be within [0, 1], got {intensity}")
            }
            ConfigError::ShimmerAngle(angle) => {
                write!(f, "shimmer angle must be finite, got {angle}")
            }
            ConfigError::Style { field, value } => {
                write!(f, "style {field} must be a non-negative number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
