// File: crates/linechart-core/src/gradient.rs
// Summary: Gradient stop derivation from line color and edge fades.

use crate::types::{Fade, LineColor};

/// One stop of the stroke/fill gradient. Offsets are percentages with the
/// gradient oriented end-to-start, so offset 100 sits at the path start.
/// Opacity is kept as the attribute string handed to the vector layer.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
    pub opacity: String,
}

/// Expand a line's color configuration into ordered gradient stops.
///
/// A solid color becomes four same-color stops so the leading and trailing
/// fades can move independently of color count: the outer stops carry the
/// fade opacities and the inner pair carries the fade span. A color list
/// maps one-to-one onto evenly spaced stops, with only the outer opacities
/// overridable.
pub fn gradient_stops(
    color: &LineColor,
    leading: Option<Fade>,
    trailing: Option<Fade>,
) -> Vec<GradientStop> {
    let colors: Vec<&str> = match color {
        LineColor::Solid(c) => vec![c.as_str(); 4],
        LineColor::Gradient(cs) => cs.iter().map(String::as_str).collect(),
    };
    let n = colors.len();
    if n == 0 {
        return Vec::new();
    }

    let is_gradient = color.is_gradient();
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let default_offset = if n == 1 {
                100.0
            } else {
                100.0 - (i as f64 / (n - 1) as f64) * 100.0
            };

            let offset = if is_gradient || i == 0 || i == n - 1 {
                default_offset
            } else if i == 1 {
                match leading {
                    Some(Fade::Tapered { percentage, .. }) => 100.0 - percentage / 2.0,
                    _ => 50.0,
                }
            } else if i == n - 2 {
                match trailing {
                    Some(Fade::Tapered { percentage, .. }) => percentage / 2.0,
                    _ => 50.0,
                }
            } else {
                default_offset
            };

            let opacity = if i == 0 {
                fade_opacity(leading)
            } else if i == n - 1 {
                fade_opacity(trailing)
            } else {
                "1".to_string()
            };

            GradientStop { offset, color: c.to_string(), opacity }
        })
        .collect()
}

fn fade_opacity(fade: Option<Fade>) -> String {
    match fade {
        None => "1".to_string(),
        Some(Fade::Opacity(o)) => format!("{o}"),
        Some(Fade::Tapered { opacity, .. }) => format!("{opacity}"),
    }
}
