//! Pure math/data for drawing in Glimmer
//!
//! Colors and geometry primitives shared by the widget and the host
//! renderer contract.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::Size;
}
