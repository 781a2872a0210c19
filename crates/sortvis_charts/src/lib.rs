//! sortvis_charts
//!
//! Turns playback frames into drawable bar charts.
//!
//! Each bar gets a [`ColorRole`](color::ColorRole) from an ordered rule list
//! and a normalised height; a [`BarChartStyle`](bar::BarChartStyle) maps roles
//! to colors. Rendering is left to the caller.

pub mod bar;
pub mod color;

pub use color::{role_of, Color, ColorRole, PartitionShading};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::{Bar, BarChartModel, BarChartStyle};
    pub use crate::color::{role_of, Color, ColorRole, PartitionShading};
}
