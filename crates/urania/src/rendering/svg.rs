//! SVG serialisation of a [`ChartSpec`].

use crate::rendering::primitives::{Color, Point, Shape, Stroke};
use crate::rendering::spec::ChartSpec;
use crate::rendering::wheel::RETROGRADE_MARK;
use std::fmt::Write;

/// Serialise a spec as a standalone SVG document.
///
/// Coordinates are written with 2 decimals so identical specs produce
/// identical documents.
pub fn to_svg(spec: &ChartSpec) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, spec);
    out
}

fn write_svg(out: &mut String, spec: &ChartSpec) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(spec.width),
        h = num(spec.height)
    )?;

    if spec.background_color.a > 0 {
        writeln!(
            out,
            r#"  <rect x="0" y="0" width="{}" height="{}"{}/>"#,
            num(spec.width),
            num(spec.height),
            fill_attr(Some(spec.background_color))
        )?;
    }

    for shape in &spec.shapes {
        write_shape(out, shape)?;
    }

    writeln!(out, "</svg>")
}

fn write_shape(out: &mut String, shape: &Shape) -> std::fmt::Result {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}"{}{}/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            fill_attr(*fill),
            stroke_attr(stroke.as_ref())
        ),
        Shape::Line { from, to, stroke } => writeln!(
            out,
            r#"  <line {}{}/>"#,
            line_coords(from, to),
            stroke_attr(Some(stroke))
        ),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            num(position.x),
            num(position.y),
            num(*size),
            anchor.as_svg(),
            fill_attr(Some(*color)),
            escape(content)
        ),
        Shape::PlanetGlyph {
            center,
            planet_id,
            glyph,
            size,
            color,
            retrograde,
        } => {
            writeln!(out, r#"  <g class="planet" data-planet="{}">"#, escape(planet_id))?;
            writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="none"{}/>"#,
                num(center.x),
                num(center.y),
                num(size * 0.75),
                stroke_attr(Some(&Stroke::solid(*color, 1.5)))
            )?;
            writeln!(
                out,
                r#"    <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle"{}>{}</text>"#,
                num(center.x),
                num(center.y + 1.0),
                num(*size),
                fill_attr(Some(*color)),
                escape(glyph)
            )?;
            if *retrograde {
                writeln!(
                    out,
                    r##"    <text class="retrograde" x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="#ef4444">{}</text>"##,
                    num(center.x + 8.0),
                    num(center.y - 8.0),
                    num(size * 0.7),
                    RETROGRADE_MARK
                )?;
            }
            writeln!(out, "  </g>")
        }
        Shape::AspectLine {
            from,
            to,
            aspect_type,
            color,
            width,
        } => writeln!(
            out,
            r#"  <line class="aspect {}" {}{}/>"#,
            escape(&aspect_type.to_lowercase()),
            line_coords(from, to),
            stroke_attr(Some(&Stroke::solid(*color, *width)))
        ),
    }
}

fn line_coords(from: &Point, to: &Point) -> String {
    format!(
        r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(from.x),
        num(from.y),
        num(to.x),
        num(to.y)
    )
}

fn fill_attr(color: Option<Color>) -> String {
    match color {
        None => r#" fill="none""#.to_string(),
        Some(c) if c.a == 255 => format!(r#" fill="{}""#, c.to_hex()),
        Some(c) => format!(r#" fill="{}" fill-opacity="{}""#, c.to_hex(), num(c.opacity())),
    }
}

fn stroke_attr(stroke: Option<&Stroke>) -> String {
    let Some(stroke) = stroke else {
        return String::new();
    };
    let mut attr = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        num(stroke.width)
    );
    if stroke.color.a < 255 {
        let _ = write!(attr, r#" stroke-opacity="{}""#, num(stroke.color.opacity()));
    }
    if let Some(dashes) = &stroke.dash_array {
        let list: Vec<String> = dashes.iter().map(|d| num(*d)).collect();
        let _ = write!(attr, r#" stroke-dasharray="{}""#, list.join(" "));
    }
    attr
}

/// Fixed 2-decimal formatting with `-0.00` folded to `0.00`.
fn num(value: f32) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
