//! Chart wheel rendering: a [`BirthChart`](crate::BirthChart) becomes a
//! declarative [`ChartSpec`] of shapes, which [`svg`] serialises.

pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;
pub mod wheel;

pub use primitives::{Color, Point, Shape, Stroke, TextAnchor};
pub use spec::ChartSpec;
pub use svg::to_svg;
pub use visual_config::VisualConfig;
pub use wheel::WheelGenerator;

/// Render a chart straight to an SVG document with the default styling.
pub fn render_svg(chart: &crate::BirthChart, size: f32) -> String {
    to_svg(&WheelGenerator::new().generate(chart, size))
}
