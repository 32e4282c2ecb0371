// File: crates/linechart-core/tests/gradient.rs
// Purpose: Validate gradient stop expansion and edge-fade placement.

use linechart_core::{gradient_stops, Fade, LineColor};

#[test]
fn solid_color_expands_to_four_stops() {
    let stops = gradient_stops(&LineColor::solid("#ff0000"), None, None);

    assert_eq!(stops.len(), 4);
    assert!(stops.iter().all(|s| s.color == "#ff0000"));
    assert_eq!(stops[0].opacity, "1");
    assert_eq!(stops[3].opacity, "1");
    assert_eq!(stops[0].offset, 100.0);
    assert_eq!(stops[1].offset, 50.0);
    assert_eq!(stops[2].offset, 50.0);
    assert_eq!(stops[3].offset, 0.0);
}

#[test]
fn three_color_gradient_spaces_stops_evenly() {
    let colors = LineColor::Gradient(vec![
        "red".to_string(),
        "green".to_string(),
        "blue".to_string(),
    ]);
    let stops = gradient_stops(&colors, None, None);

    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].offset, 100.0);
    assert_eq!(stops[1].offset, 50.0);
    assert_eq!(stops[2].offset, 0.0);
    assert!(stops.iter().all(|s| s.opacity == "1"));
}

#[test]
fn leading_percentage_shifts_the_second_stop() {
    let stops = gradient_stops(
        &LineColor::solid("black"),
        Some(Fade::Tapered { opacity: 0.2, percentage: 30.0 }),
        None,
    );

    assert_eq!(stops[0].opacity, "0.2");
    assert_eq!(stops[1].offset, 85.0);
    // Trailing side keeps the midpoint default.
    assert_eq!(stops[2].offset, 50.0);
    assert_eq!(stops[3].opacity, "1");
}

#[test]
fn trailing_percentage_shifts_the_second_to_last_stop() {
    let stops = gradient_stops(
        &LineColor::solid("black"),
        None,
        Some(Fade::Tapered { opacity: 0.0, percentage: 40.0 }),
    );

    assert_eq!(stops[1].offset, 50.0);
    assert_eq!(stops[2].offset, 20.0);
    assert_eq!(stops[3].opacity, "0");
}

#[test]
fn raw_opacity_fade_keeps_default_offsets() {
    let stops = gradient_stops(
        &LineColor::solid("black"),
        Some(Fade::Opacity(0.5)),
        Some(Fade::Opacity(0.25)),
    );

    assert_eq!(stops[0].opacity, "0.5");
    assert_eq!(stops[3].opacity, "0.25");
    assert_eq!(stops[1].offset, 50.0);
    assert_eq!(stops[2].offset, 50.0);
}

#[test]
fn gradient_list_keeps_even_offsets_under_fades() {
    let colors = LineColor::Gradient(vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "d".to_string(),
        "e".to_string(),
    ]);
    let stops = gradient_stops(
        &colors,
        Some(Fade::Tapered { opacity: 0.1, percentage: 80.0 }),
        None,
    );

    // Fade opacity lands on the outer stops, but a color list never moves
    // its offsets.
    assert_eq!(stops[0].opacity, "0.1");
    assert_eq!(stops[0].offset, 100.0);
    assert_eq!(stops[1].offset, 75.0);
    assert_eq!(stops[2].offset, 50.0);
    assert_eq!(stops[3].offset, 25.0);
    assert_eq!(stops[4].offset, 0.0);
}
