use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            background_color: Color::TRANSPARENT,
            shapes: Vec::new(),
        }
    }
}
