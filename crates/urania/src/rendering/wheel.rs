use crate::chart::BirthChart;
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::VisualConfig;
use crate::zodiac::ZodiacSign;

/// Converts a [`BirthChart`] into a square [`ChartSpec`].
///
/// Layout, from the outside in: outer ring, sign glyphs, house cusp lines
/// with numbers, planet glyphs, inner ring, aspect lines across the middle.
pub struct WheelGenerator {
    visual_config: VisualConfig,
}

impl WheelGenerator {
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn generate(&self, chart: &BirthChart, size: f32) -> ChartSpec {
        let mut spec = ChartSpec::new(size, size);
        spec.background_color = self.visual_config.background_color;
        let center = spec.center;
        let half = size / 2.0;
        let cfg = &self.visual_config;

        let outer_radius = (half - 15.0).max(1.0);
        let sign_radius = (half - cfg.sign_ring_inset).max(1.0);
        let planet_radius = (half - cfg.planet_ring_inset).max(1.0);
        let inner_radius = (half - cfg.inner_ring_inset).max(1.0);
        let cusp_inner = (half - 60.0).max(1.0);

        let ring = |radius: f32| Shape::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(Stroke::solid(cfg.ring_color, cfg.ring_stroke_width)),
        };

        spec.shapes.push(ring(outer_radius));
        spec.shapes.push(ring(half - 25.0));

        for sign in ZodiacSign::ALL {
            spec.shapes.push(Shape::Text {
                position: self.polar(center, sign.start_longitude() + 15.0, sign_radius),
                content: sign.glyph().to_string(),
                size: cfg.glyph_size,
                color: cfg.sign_colors[sign.index()],
                anchor: TextAnchor::Middle,
            });
        }

        for cusp in &chart.houses {
            spec.shapes.push(Shape::Line {
                from: self.polar(center, cusp.longitude, cusp_inner),
                to: self.polar(center, cusp.longitude, outer_radius),
                stroke: Stroke::solid(cfg.cusp_color, cfg.cusp_stroke_width),
            });
            spec.shapes.push(Shape::Text {
                position: self.polar(center, cusp.longitude + 5.0, outer_radius - 20.0),
                content: cusp.house.to_string(),
                size: cfg.glyph_size * 0.7,
                color: cfg.label_color,
                anchor: TextAnchor::Middle,
            });
        }

        spec.shapes.push(ring(inner_radius));

        for aspect in &chart.aspects {
            let (Some(p1), Some(p2)) = (chart.planet(aspect.planet1), chart.planet(aspect.planet2)) else {
                continue;
            };
            spec.shapes.push(Shape::AspectLine {
                from: self.polar(center, p1.longitude, inner_radius),
                to: self.polar(center, p2.longitude, inner_radius),
                aspect_type: aspect.aspect.name().to_string(),
                color: cfg.aspect_color(aspect.aspect),
                width: cfg.aspect_stroke_width,
            });
        }

        for planet in &chart.planets {
            spec.shapes.push(Shape::PlanetGlyph {
                center: self.polar(center, planet.longitude, planet_radius),
                planet_id: planet.planet.name().to_lowercase(),
                glyph: planet.symbol.clone(),
                size: cfg.glyph_size,
                color: cfg.planet_color(planet.planet),
                retrograde: planet.is_retrograde,
            });
        }

        spec
    }

    /// Point at `longitude` on a circle of `radius` around `center`.
    fn polar(&self, center: Point, longitude: f64, radius: f32) -> Point {
        let angle = (longitude as f32 + self.visual_config.rotation).to_radians();
        Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
}

impl Default for WheelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Retrograde marker drawn next to a planet glyph.
pub const RETROGRADE_MARK: &str = "℞";
