#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Histogram Morph Example
//!
//! Bins a drifting sample into a fixed set of bars and animates the counts,
//! with a line series tracing the running mean on the same axis.
//!
//! Run with: `cargo run --example histogram_morph`

use keyplot::prelude::*;

fn samples(shift: f32) -> Vec<f32> {
    // deterministic, roughly bell-shaped
    (0..400)
        .map(|i| {
            let u = ((i * 7919) % 1000) as f32 / 1000.0;
            let v = ((i * 104_729) % 1000) as f32 / 1000.0;
            (u + v) * 3.0 + shift
        })
        .collect()
}

fn main() {
    println!("Histogram Morph Example");
    println!("=======================\n");

    let mut axis = Axis::new(Viewport::from_size(480.0, 320.0));
    let hist = axis
        .histogram(DataWithAesthetic::new().x(&samples(0.0)), BinStrategy::Sturges)
        .expect("Failed to bin samples");

    let mean = |shift: f32| {
        let s = samples(shift);
        s.iter().sum::<f32>() / s.len() as f32
    };
    let trace = axis
        .line(DataWithAesthetic::new().x(&[mean(0.0), mean(0.0)]).y(&[0.0, 60.0]))
        .expect("Failed to register line");

    for step in 1..=4 {
        let shift = step as f32 * 0.5;
        let time = step as f32;
        axis.add_frame(hist, DataWithAesthetic::new().x(&samples(shift)), time)
            .expect("Failed to add histogram frame");
        axis.add_frame(
            trace,
            DataWithAesthetic::new().x(&[mean(shift), mean(shift)]).y(&[0.0, 60.0]),
            time,
        )
        .expect("Failed to add line frame");
    }

    axis.fit_limits();
    axis.update_tick_information();

    if let Some(histogram) = axis.plots()[hist].as_histogram() {
        println!("  Bins:   {}", histogram.keyframes().rows());
    }
    println!("  Limits: {}", axis.limits().project([0, 1]).delta());

    let mut svg = SvgBackend::new(480, 320);
    axis.draw_animated(&mut svg);
    svg.write_to_file("histogram_morph.svg").expect("Failed to write");
    println!("  Saved: histogram_morph.svg");

    let mut raster = Raster::new(480, 320).expect("Failed to allocate raster");
    raster.clear(Rgba::WHITE);
    axis.draw(&mut raster, 2.5);
    raster.write_png("histogram_morph.png").expect("Failed to write");
    println!("  Saved: histogram_morph.png (t = 2.5)");
}
