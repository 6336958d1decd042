use crate::aspects::AspectKind;
use crate::ephemeris::Planet;
use crate::rendering::primitives::Color;

/// Visual styling for the chart wheel
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub ring_color: Color,
    pub cusp_color: Color,
    pub label_color: Color,
    /// Aries through Pisces
    pub sign_colors: [Color; 12],
    pub ring_stroke_width: f32,
    pub cusp_stroke_width: f32,
    pub aspect_stroke_width: f32,
    pub glyph_size: f32,
    /// Degrees added to every longitude before placing it on the wheel
    pub rotation: f32,
    /// Margins from the outer edge, in px
    pub sign_ring_inset: f32,
    pub planet_ring_inset: f32,
    pub inner_ring_inset: f32,
}

impl VisualConfig {
    pub fn planet_color(&self, planet: Planet) -> Color {
        let hex = match planet {
            Planet::Sun => "#FFD700",
            Planet::Moon => "#C0C0C0",
            Planet::Mercury => "#8B7355",
            Planet::Venus => "#FFC0CB",
            Planet::Mars => "#DC143C",
            Planet::Jupiter => "#FFA500",
            Planet::Saturn => "#808080",
            Planet::Uranus => "#87CEEB",
            Planet::Neptune => "#4169E1",
            Planet::Pluto => "#8B0000",
        };
        Color::from_hex(hex).unwrap_or(Color::WHITE)
    }

    pub fn aspect_color(&self, kind: AspectKind) -> Color {
        let hex = match kind {
            AspectKind::Conjunction => "#FFD700",
            AspectKind::Opposition => "#FF0000",
            AspectKind::Trine => "#27AE60",
            AspectKind::Square => "#FF4500",
            AspectKind::Sextile => "#1E90FF",
        };
        Color::from_hex(hex).unwrap_or(Color::WHITE)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        let sign_colors = [
            "#EF4444", // Aries
            "#22C55E", // Taurus
            "#EAB308", // Gemini
            "#3B82F6", // Cancer
            "#F97316", // Leo
            "#A855F7", // Virgo
            "#EC4899", // Libra
            "#DC2626", // Scorpio
            "#2563EB", // Sagittarius
            "#6B7280", // Capricorn
            "#06B6D4", // Aquarius
            "#6366F1", // Pisces
        ]
        .map(|hex| Color::from_hex(hex).unwrap_or(Color::WHITE));

        Self {
            background_color: Color::TRANSPARENT,
            ring_color: Color::from_hex("#C9A227").unwrap_or(Color::WHITE),
            cusp_color: Color::from_hex("#94A3B8").unwrap_or(Color::WHITE),
            label_color: Color::from_hex("#64748B").unwrap_or(Color::WHITE),
            sign_colors,
            ring_stroke_width: 1.0,
            cusp_stroke_width: 1.5,
            aspect_stroke_width: 1.0,
            glyph_size: 14.0,
            rotation: 0.0,
            sign_ring_inset: 35.0,
            planet_ring_inset: 50.0,
            inner_ring_inset: 70.0,
        }
    }
}
