//! Keyframe resolution and pixel-space blending.
//!
//! Run: cargo test --test keyframe_interpolation_test

#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use keyplot::prelude::*;

fn transform() -> DisplayTransform {
    let mut limits = Limits::empty();
    limits.set_range(0, 0.0, 10.0);
    limits.set_range(1, 0.0, 10.0);
    limits.set_range(3, 0.0, 10.0);
    DisplayTransform::new(&limits, &Viewport::from_size(100.0, 100.0), (2.0, 12.0))
}

fn series(frames: &[(DataWithAesthetic, f32)]) -> Points {
    let mut points = Points::new(Rgba::RED);
    for (data, time) in frames {
        points
            .add_frame(data.clone(), *time)
            .expect("operation should succeed");
    }
    points
}

#[test]
fn weights_between_two_frames() {
    let points = series(&[
        (DataWithAesthetic::new().x(&[0.0]).y(&[0.0]), 0.0),
        (DataWithAesthetic::new().x(&[10.0]).y(&[10.0]), 1.0),
    ]);

    let info = points
        .keyframes()
        .frame_info(0.25)
        .expect("operation should succeed");
    assert_eq!(info.frame_above, 1);
    assert_relative_eq!(info.w1, 0.25);
    assert_relative_eq!(info.w2, 0.75);
    assert_relative_eq!(info.w1 + info.w2, 1.0);
}

#[test]
fn exact_time_never_reads_previous_frame() {
    // frame 0 would poison every channel if it were blended in
    let points = series(&[
        (DataWithAesthetic::new().x(&[f32::NAN]).y(&[f32::NAN]), 0.0),
        (DataWithAesthetic::new().x(&[5.0]).y(&[5.0]), 1.0),
    ]);

    let info = points
        .keyframes()
        .frame_info(1.0)
        .expect("operation should succeed");
    assert!(info.is_exact());

    let mut rec = Recorder::new();
    points.draw(&mut rec, &transform(), 1.0);
    let circles = rec.circles();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].0, Vec2::xy(50.0, 50.0));
}

#[test]
fn times_outside_the_range_clamp() {
    let points = series(&[
        (DataWithAesthetic::new().x(&[1.0]).y(&[1.0]), 1.0),
        (DataWithAesthetic::new().x(&[9.0]).y(&[9.0]), 2.0),
    ]);
    let t = transform();

    let mut before = Recorder::new();
    points.draw(&mut before, &t, -100.0);
    let (centre, _) = before.circles()[0];
    assert_relative_eq!(centre[0], 10.0, epsilon = 1e-4);
    assert_relative_eq!(centre[1], 90.0, epsilon = 1e-4);

    let mut after = Recorder::new();
    points.draw(&mut after, &t, 100.0);
    let (centre, _) = after.circles()[0];
    assert_relative_eq!(centre[0], 90.0, epsilon = 1e-4);
    assert_relative_eq!(centre[1], 10.0, epsilon = 1e-4);
}

#[test]
fn missing_size_uses_default_radius_per_frame() {
    let points = series(&[
        (DataWithAesthetic::new().x(&[1.0, 2.0]).y(&[1.0, 2.0]).size(&[10.0, 10.0]), 0.0),
        (DataWithAesthetic::new().x(&[1.0, 2.0]).y(&[1.0, 2.0]), 1.0),
    ]);
    let t = transform();

    let mut rec = Recorder::new();
    points.draw(&mut rec, &t, 1.0);
    assert!(rec.circles().iter().all(|(_, radius)| *radius == 1.0));

    rec.clear();
    points.draw(&mut rec, &t, 0.0);
    assert!(rec.circles().iter().all(|(_, radius)| *radius == 12.0));

    rec.clear();
    points.draw(&mut rec, &t, 0.5);
    assert!(rec.circles().iter().all(|(_, radius)| (*radius - 6.5).abs() < 1e-5));
}

#[test]
fn color_blends_in_colormap_space() {
    let mut limits = Limits::empty();
    limits.set_range(0, 0.0, 1.0);
    limits.set_range(1, 0.0, 1.0);
    limits.set_range(2, 0.0, 1.0);
    let t = DisplayTransform::new(&limits, &Viewport::from_size(10.0, 10.0), (2.0, 12.0));

    let points = series(&[
        (DataWithAesthetic::new().x(&[0.0]).y(&[0.0]).color(&[0.0]), 0.0),
        (DataWithAesthetic::new().x(&[0.0]).y(&[0.0]).color(&[1.0]), 1.0),
    ])
    .with_colormap(ColorScale::greyscale());

    let mut rec = Recorder::new();
    points.draw(&mut rec, &t, 0.5);
    assert_eq!(
        rec.commands()[0],
        DrawCommand::FillColor(ColorScale::greyscale().to_color(0.5))
    );
}

#[test]
fn zero_frames_draw_nothing() {
    let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
    let index = axis.add_plot(Points::new(Rgba::BLUE));
    assert_eq!(axis.plot(index).expect("operation should succeed").keyframes().len(), 0);

    let mut rec = Recorder::new();
    axis.plots()[index].draw(&mut rec, &axis.transform(), 0.0);
    assert!(rec.commands().is_empty());

    axis.draw_animated(&mut rec);
    assert!(!rec.commands().contains(&DrawCommand::EndAnimatedCircle));
}

#[test]
fn animated_chain_has_one_key_per_frame() {
    let points = series(&[
        (DataWithAesthetic::new().x(&[0.0, 1.0, 2.0]).y(&[0.0, 1.0, 2.0]), 0.0),
        (DataWithAesthetic::new().x(&[1.0, 2.0, 3.0]).y(&[1.0, 2.0, 3.0]), 0.5),
        (DataWithAesthetic::new().x(&[2.0, 3.0, 4.0]).y(&[2.0, 3.0, 4.0]), 1.5),
    ]);

    let mut rec = Recorder::new();
    points.draw_animated(&mut rec, &transform());

    let mut chains: Vec<Vec<f32>> = vec![Vec::new()];
    for command in rec.commands() {
        match command {
            DrawCommand::AnimatedCircle { time, .. } => {
                if let Some(chain) = chains.last_mut() {
                    chain.push(*time);
                }
            }
            DrawCommand::EndAnimatedCircle => chains.push(Vec::new()),
            _ => {}
        }
    }
    chains.pop();

    assert_eq!(chains.len(), 3);
    for chain in chains {
        assert_eq!(chain, vec![0.0, 0.5, 1.5]);
    }
}
