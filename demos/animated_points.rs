#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Animated Scatter Example
//!
//! Registers a point series from a named-column frame, appends keyframes,
//! then writes an animated SVG and a PNG snapshot halfway through.
//!
//! Run with: `cargo run --example animated_points`

use keyplot::prelude::*;

fn frame(phase: f32) -> DataFrame {
    let n = 24;
    let x: Vec<f32> = (0..n).map(|i| i as f32 / n as f32 * 6.0).collect();
    let y: Vec<f32> = x.iter().map(|v| (v + phase).sin()).collect();
    let heat: Vec<f32> = y.iter().map(|v| v * 0.5 + 0.5).collect();
    let radius: Vec<f32> = (0..n).map(|i| ((i + (phase * 4.0) as usize) % 5) as f32).collect();

    DataFrame::from_xy(&x, &y)
        .column("heat", &heat)
        .column("radius", &radius)
}

fn main() {
    println!("Animated Scatter Example");
    println!("========================\n");

    let aes = Aes::new().x("x").y("y").color("heat").size("radius");
    let mut axis = Axis::with_config(
        Viewport::from_size(640.0, 360.0),
        AxisConfig::new().size_range(2.0, 9.0),
    );

    let first = DataWithAesthetic::from_frame(&frame(0.0), &aes).expect("columns should exist");
    let index = axis.points(first).expect("Failed to register series");

    for (step, time) in [0.8_f32, 1.6, 2.4, 4.0].iter().enumerate() {
        let data = DataWithAesthetic::from_frame(&frame((step + 1) as f32 * 0.75), &aes)
            .expect("columns should exist");
        axis.add_frame(index, data, *time).expect("Failed to add frame");
    }
    axis.update_tick_information();

    let (nx, ny) = axis.calculate_num_ticks();
    println!("  Frames: {}", axis.plots()[index].keyframes().len());
    println!("  Ticks:  {nx} x {ny}");

    let mut svg = SvgBackend::new(640, 360);
    axis.draw_animated(&mut svg);
    svg.write_to_file("animated_points.svg").expect("Failed to write");
    println!("  Saved: animated_points.svg ({} elements)", svg.element_count());

    let mut raster = Raster::new(640, 360).expect("Failed to allocate raster");
    raster.clear(Rgba::WHITE);
    axis.draw(&mut raster, 2.0);
    raster.write_png("animated_points.png").expect("Failed to write");
    println!("  Saved: animated_points.png (t = 2.0)");
}
