// File: crates/linechart-examples/src/bin/interactive.rs
// Summary: Builds an interactive two-line chart, simulates a touch sweep,
//          and writes the final frame as an SVG.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use linechart_core::{
    ActivePointConfig, AnimationConfig, Chart, ChartConfig, ChartFrame, Curve, DataPoint,
    EndPointConfig, Fade, Line, LineColor,
};

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 320.0;

fn main() -> Result<()> {
    setup_logger()?;

    let prices: Vec<DataPoint> = (0..60)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, 100.0 + (x * 0.35).sin() * 12.0 + x * 0.4)
        })
        .collect();
    let baseline: Vec<DataPoint> = (0..60)
        .map(|i| DataPoint::new(i as f64, 95.0 + i as f64 * 0.45))
        .collect();

    let price_line = Line::new(prices)
        .with_color(LineColor::Gradient(vec![
            "#16a34a".to_string(),
            "#eab308".to_string(),
            "#dc2626".to_string(),
        ]))
        .with_curve(Curve::Monotone)
        .area()
        .with_active_point(ActivePointConfig {
            show_vertical_line: true,
            ..ActivePointConfig::default()
        })
        .with_end_point(EndPointConfig { animated: true, ..EndPointConfig::default() })
        .with_snapshot_follower(|p| {
            if let Some(p) = p {
                log::debug!("follower snapshot: x={:.0} y={:.2}", p.x, p.y);
            }
        });

    let mut trend_line = Line::new(baseline)
        .with_color(LineColor::solid("#64748b"))
        .with_width(1.0);
    trend_line.dash_array = Some(vec![4.0, 4.0]);
    trend_line.trailing_fade = Some(Fade::Tapered { opacity: 0.0, percentage: 30.0 });

    let config = ChartConfig {
        animation: Some(AnimationConfig::fade(250.0)),
        ..ChartConfig::default()
    };
    let mut chart = Chart::new(vec![price_line, trend_line], WIDTH, HEIGHT, config);

    chart.on_point_change(|p| match p {
        Some(p) => println!("active point: x={:.0} y={:.2}", p.x, p.y),
        None => println!("active point cleared"),
    });

    // Simulated 60 fps touch sweep across the canvas.
    let mut now = 0.0;
    for i in 0..48 {
        chart.touch_move(i as f32 * (WIDTH / 48.0));
        chart.tick(now);
        if chart.pump_host() {
            log::debug!("host refresh requested");
        }
        now += 16.0;
    }
    chart.touch_end();
    chart.tick(now);
    chart.pump_host();

    let svg = render_svg(&chart.frame(now));
    let out = std::path::PathBuf::from("target/out/interactive.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create '{}'", parent.display()))?;
    }
    std::fs::write(&out, svg).with_context(|| format!("write '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn setup_logger() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()
        .context("install logger")?;
    Ok(())
}

fn render_svg(frame: &ChartFrame) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
    );

    for (i, line) in frame.lines.iter().enumerate() {
        let Some(first) = line.path.data().first() else { continue };
        let Some(last) = line.path.data().last() else { continue };
        let start_x = line.path.x(first.x);
        let end_x = line.path.x(last.x);

        // The gradient runs end-to-start, matching the stop offsets.
        let _ = write!(
            svg,
            "<defs><linearGradient id=\"line-{i}\" gradientUnits=\"userSpaceOnUse\" \
             x1=\"{end_x}\" y1=\"0\" x2=\"{start_x}\" y2=\"0\">"
        );
        for stop in line.stops {
            let _ = write!(
                svg,
                "<stop offset=\"{}%\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                stop.offset, stop.color, stop.opacity
            );
        }
        let _ = write!(svg, "</linearGradient></defs>");

        let fill = if line.filled { format!("url(#line-{i})") } else { "transparent".to_string() };
        let dash = line
            .dash_array
            .map(|d| {
                let joined =
                    d.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                format!(" stroke-dasharray=\"{joined}\"")
            })
            .unwrap_or_default();
        let _ = write!(
            svg,
            "<path d=\"{}\" stroke=\"url(#line-{i})\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" fill=\"{fill}\" fill-opacity=\"{}\" opacity=\"{}\"{dash}/>",
            line.path.to_svg(),
            line.stroke_width,
            line.fill_opacity,
            line.opacity
        );

        if let Some(ep) = &line.end_point {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                ep.x, ep.y, ep.radius, ep.color
            );
        }
    }

    if let Some(active) = &frame.active {
        if active.config.show_vertical_line {
            let _ = write!(
                svg,
                "<line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{HEIGHT}\" stroke=\"{}\" \
                 stroke-width=\"{}\" opacity=\"{}\"/>",
                active.config.vertical_line_color,
                active.config.vertical_line_width,
                active.config.vertical_line_opacity * active.opacity,
                x = active.x,
            );
        }
        if active.config.show_active_point_circle {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" \
                 stroke-width=\"{}\" opacity=\"{}\"/>",
                active.x,
                active.y,
                active.config.radius,
                active.color,
                active.config.border_color,
                active.config.border_width,
                active.opacity
            );
        }
    }

    svg.push_str("</svg>");
    svg
}
