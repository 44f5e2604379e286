//! Single-axis coordinate transform, tick layout and series ownership.
//!
//! An [`Axis`] owns data-space limits, a pixel viewport, tick state and the
//! series drawn into it. Tick information is rebuilt explicitly with
//! [`Axis::update_tick_information`] after limits, viewport or tick
//! configuration change; nothing is invalidated automatically.
//!
//! # Example
//!
//! ```
//! use keyplot::prelude::*;
//!
//! let mut axis = Axis::new(Viewport::from_size(200.0, 100.0));
//! let frame = DataWithAesthetic::new().x(&[0.0, 10.0]).y(&[0.0, 5.0]);
//! let index = axis.points(frame).unwrap();
//! axis.add_frame(index, DataWithAesthetic::new().x(&[2.0, 8.0]).y(&[1.0, 4.0]), 1.0)
//!     .unwrap();
//!
//! axis.update_tick_information();
//! assert_eq!(axis.calculate_num_ticks(), (10, 5));
//!
//! let mut recorder = Recorder::new();
//! axis.draw(&mut recorder, 0.5);
//! assert_eq!(recorder.circles().len(), 2);
//! ```

mod ticks;
mod transform;

pub use ticks::{num_ticks, TickInfo, DEFAULT_TICKS};
pub use transform::{
    effective_limits, DisplayTransform, PixelFrame, DEFAULT_COLOR_POSITION, DEFAULT_RADIUS,
};

use crate::backend::{AnimatedBackend, Backend};
use crate::config::AxisConfig;
use crate::error::{Error, Result};
use crate::geometry::{Limits, Viewport};
use crate::grammar::{Aesthetic, BinStrategy, DataWithAesthetic};
use crate::plots::{Histogram, Line, Plot, Points};
use crate::scale::ColorScale;
use crate::vector::Vec2;
use log::{debug, warn};

/// A single axis: limits, viewport, ticks and the series drawn into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    limits: Limits,
    viewport: Viewport,
    config: AxisConfig,
    tick_info: TickInfo,
    plots: Vec<Plot>,
}

impl Axis {
    /// Empty axis with the default configuration.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, AxisConfig::default())
    }

    /// Empty axis with the given configuration.
    #[must_use]
    pub fn with_config(viewport: Viewport, config: AxisConfig) -> Self {
        Self {
            limits: Limits::empty(),
            viewport,
            config,
            tick_info: TickInfo::default(),
            plots: Vec::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Data-space limits. Inverted axes hold no data yet.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Replace the limits.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Reset the limits to the union of every series' extent.
    pub fn fit_limits(&mut self) {
        self.limits = self
            .plots
            .iter()
            .fold(Limits::empty(), |acc, plot| acc.union(&plot.limits()));
    }

    /// Pixel viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Request an x tick count (0 = automatic).
    pub fn set_x_ticks(&mut self, n: usize) {
        self.config.x_ticks = n;
    }

    /// Request a y tick count (0 = automatic).
    pub fn set_y_ticks(&mut self, n: usize) {
        self.config.y_ticks = n;
    }

    /// Set the significant digits kept in the tick spacing.
    pub fn set_significant_digits(&mut self, digits: u32) {
        self.config.significant_digits = digits;
    }

    /// Ticks as of the last [`Axis::update_tick_information`].
    #[must_use]
    pub fn tick_info(&self) -> &TickInfo {
        &self.tick_info
    }

    /// Resolved `(x, y)` tick counts for the current viewport.
    #[must_use]
    pub fn calculate_num_ticks(&self) -> (usize, usize) {
        num_ticks((self.config.x_ticks, self.config.y_ticks), &self.viewport)
    }

    /// Clear and recompute the tick values and positions.
    pub fn update_tick_information(&mut self) {
        let counts = self.calculate_num_ticks();
        self.tick_info.rebuild(
            &self.limits,
            &self.viewport,
            counts,
            self.config.significant_digits,
        );
    }

    /// Data-to-pixel transform for the current limits and viewport.
    #[must_use]
    pub fn transform(&self) -> DisplayTransform {
        DisplayTransform::new(&self.limits, &self.viewport, self.config.size_range)
    }

    /// Map a data value on one aesthetic to pixel space.
    #[must_use]
    pub fn to_display(&self, value: f32, aesthetic: Aesthetic) -> f32 {
        self.transform().to_display(value, aesthetic)
    }

    /// Map a pixel position back to data-space `(x, y)`.
    #[must_use]
    pub fn from_display(&self, pixel: Vec2) -> Vec2 {
        let transform = self.transform();
        Vec2::xy(
            transform.from_display(pixel[0], Aesthetic::X),
            transform.from_display(pixel[1], Aesthetic::Y),
        )
    }

    /// Append a series, assigning it the next palette color.
    ///
    /// Returns the series' index, which stays valid for the axis' lifetime.
    pub fn add_plot(&mut self, plot: impl Into<Plot>) -> usize {
        let mut plot = plot.into();
        let index = self.plots.len();
        plot.set_color(self.config.palette.get(index));
        self.limits = self.limits.union(&plot.limits());

        debug!(
            target: "keyplot",
            "registered {} plot #{index} ({} frames)",
            plot.kind(),
            plot.keyframes().len()
        );
        self.plots.push(plot);
        index
    }

    /// Register a point series whose first frame is `data` at time 0.
    ///
    /// A color channel in `data` switches the series to the viridis colormap.
    /// Only this first frame decides: without a color channel here, color
    /// values in later frames are ignored and the palette color is used.
    /// Set a colormap later through [`Axis::plot_mut`] and [`Plot::as_points_mut`].
    ///
    /// # Errors
    ///
    /// Returns the frame validation error if `data` is malformed.
    pub fn points(&mut self, data: DataWithAesthetic) -> Result<usize> {
        let mut points = Points::new(self.config.palette.get(self.plots.len()));
        if data.has(Aesthetic::Color) {
            points.set_colormap(Some(ColorScale::viridis()));
        }
        points.add_frame(data, 0.0)?;
        Ok(self.add_plot(points))
    }

    /// Register a line series whose first frame is `data` at time 0.
    ///
    /// # Errors
    ///
    /// Returns the frame validation error if `data` is malformed.
    pub fn line(&mut self, data: DataWithAesthetic) -> Result<usize> {
        let mut line = Line::new(self.config.palette.get(self.plots.len()));
        line.add_frame(data, 0.0)?;
        Ok(self.add_plot(line))
    }

    /// Register a histogram of the x samples in `data`, binned at time 0.
    ///
    /// # Errors
    ///
    /// Returns the binning or frame validation error.
    pub fn histogram(&mut self, data: DataWithAesthetic, strategy: BinStrategy) -> Result<usize> {
        let mut histogram = Histogram::new(strategy, self.config.palette.get(self.plots.len()));
        histogram.add_frame(data, 0.0)?;
        Ok(self.add_plot(histogram))
    }

    /// Series in registration (draw) order.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Series at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlotIndex`] if no series has that index.
    pub fn plot(&self, index: usize) -> Result<&Plot> {
        let len = self.plots.len();
        self.plots.get(index).ok_or(Error::PlotIndex { index, len })
    }

    /// Mutable series at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlotIndex`] if no series has that index.
    pub fn plot_mut(&mut self, index: usize) -> Result<&mut Plot> {
        let len = self.plots.len();
        self.plots.get_mut(index).ok_or(Error::PlotIndex { index, len })
    }

    /// Append a frame to the series at `index` and grow the limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlotIndex`] for a bad index, or the series' frame
    /// validation error. A rejected frame leaves the axis unchanged.
    pub fn add_frame(&mut self, index: usize, data: DataWithAesthetic, time: f32) -> Result<()> {
        let plot = self.plot_mut(index)?;
        if let Err(err) = plot.add_frame(data, time) {
            warn!(target: "keyplot", "plot #{index}: frame at t={time} rejected: {err}");
            return Err(err);
        }

        let limits = plot.limits();
        self.limits = self.limits.union(&limits);
        Ok(())
    }

    /// Axis lines along the bottom and left viewport edges, plus tick marks.
    fn draw_frame<B: Backend + ?Sized>(&self, backend: &mut B) {
        let vp = &self.viewport;
        let (left, top) = (vp.bmin[0], vp.bmin[1]);
        let (right, bottom) = (vp.bmax[0], vp.bmax[1]);
        let tick = self.config.tick_length;

        backend.stroke_width(self.config.line_width);
        backend.stroke_color(self.config.axis_color);
        backend.line(Vec2::xy(left, bottom), Vec2::xy(right, bottom));
        backend.line(Vec2::xy(left, bottom), Vec2::xy(left, top));

        for (_, x) in self.tick_info.x_ticks() {
            backend.line(Vec2::xy(x, bottom), Vec2::xy(x, bottom + tick));
        }
        for (_, y) in self.tick_info.y_ticks() {
            backend.line(Vec2::xy(left - tick, y), Vec2::xy(left, y));
        }
    }

    /// Draw axis lines, ticks and every series as they appear at `time`.
    pub fn draw<B: Backend + ?Sized>(&self, backend: &mut B, time: f32) {
        self.draw_frame(backend);
        let transform = self.transform();
        for plot in &self.plots {
            plot.draw(backend, &transform, time);
        }
    }

    /// Draw axis lines and ticks, then emit every series' keyframe chains.
    pub fn draw_animated<B: AnimatedBackend + ?Sized>(&self, backend: &mut B) {
        self.draw_frame(backend);
        let transform = self.transform();
        for plot in &self.plots {
            plot.draw_animated(backend, &transform);
        }
    }
}

impl batuta_common::display::WithDimensions for Axis {
    /// Resize to a viewport of `width` x `height` pixels at the origin.
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.resize(Viewport::from_size(width as f32, height as f32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, Recorder};
    use crate::color::{Palette, Rgba};
    use crate::plots::PlotKind;
    use batuta_common::display::WithDimensions;

    fn xy(x: &[f32], y: &[f32]) -> DataWithAesthetic {
        DataWithAesthetic::new().x(x).y(y)
    }

    #[test]
    fn test_registration_assigns_palette_in_order() {
        let palette = Palette::new(vec![Rgba::RED, Rgba::GREEN]).expect("operation should succeed");
        let mut axis = Axis::with_config(
            Viewport::from_size(100.0, 100.0),
            AxisConfig::new().palette(palette),
        );

        let a = axis.points(xy(&[0.0], &[0.0])).expect("operation should succeed");
        let b = axis.line(xy(&[0.0, 1.0], &[0.0, 1.0])).expect("operation should succeed");
        let c = axis
            .histogram(DataWithAesthetic::new().x(&[1.0, 2.0]), BinStrategy::Fixed(2))
            .expect("operation should succeed");
        assert_eq!((a, b, c), (0, 1, 2));

        let colors: Vec<Rgba> = axis.plots().iter().map(Plot::color).collect();
        assert_eq!(colors, vec![Rgba::RED, Rgba::GREEN, Rgba::RED]);
        assert_eq!(axis.plot(2).expect("operation should succeed").kind(), PlotKind::Histogram);
    }

    #[test]
    fn test_registration_grows_limits() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        assert!(axis.limits().is_empty());
        axis.points(xy(&[1.0, 4.0], &[-2.0, 2.0])).expect("operation should succeed");
        assert_eq!(axis.limits().range(0), (1.0, 4.0));
        assert_eq!(axis.limits().range(1), (-2.0, 2.0));

        axis.add_frame(0, xy(&[0.0, 8.0], &[0.0, 1.0]), 1.0)
            .expect("operation should succeed");
        assert_eq!(axis.limits().range(0), (0.0, 8.0));
    }

    #[test]
    fn test_bad_index_and_bad_frame() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        assert!(matches!(axis.plot(0), Err(Error::PlotIndex { index: 0, len: 0 })));

        axis.points(xy(&[1.0], &[1.0])).expect("operation should succeed");
        let before = *axis.limits();
        assert!(axis.add_frame(0, xy(&[9.0, 9.0], &[9.0, 9.0]), 1.0).is_err());
        assert_eq!(*axis.limits(), before);
        assert!(axis.add_frame(3, xy(&[1.0], &[1.0]), 1.0).is_err());
    }

    #[test]
    fn test_color_channel_selects_colormap() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        axis.points(xy(&[0.0], &[0.0]).color(&[1.0])).expect("operation should succeed");
        axis.points(xy(&[0.0], &[0.0])).expect("operation should succeed");

        let plots = axis.plots();
        assert!(plots[0].as_points().and_then(Points::colormap).is_some());
        assert!(plots[1].as_points().and_then(Points::colormap).is_none());
    }

    #[test]
    fn test_update_tick_information() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        let mut limits = Limits::empty();
        limits.set_range(0, 0.0, 10.0);
        limits.set_range(1, 0.0, 10.0);
        axis.set_limits(limits);

        axis.update_tick_information();
        assert_eq!(axis.tick_info().x_val, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(axis.tick_info().y_pos, vec![100.0, 80.0, 60.0, 40.0, 20.0]);

        axis.set_x_ticks(2);
        axis.set_y_ticks(2);
        axis.update_tick_information();
        assert_eq!(axis.tick_info().x_val, vec![0.0, 5.0]);
    }

    #[test]
    fn test_degenerate_limits_tick_over_unit_range() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        axis.update_tick_information();
        let ticks = axis.tick_info();
        assert_eq!(ticks.x_val.len(), 5);
        assert!(ticks.x_val.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)));
        assert_eq!(ticks.x_val[0], 0.0);
    }

    #[test]
    fn test_display_round_trip() {
        let mut axis = Axis::new(Viewport::from_size(200.0, 100.0));
        axis.points(xy(&[0.0, 10.0], &[0.0, 5.0])).expect("operation should succeed");
        assert_eq!(axis.to_display(5.0, Aesthetic::Y), 0.0);
        assert_eq!(axis.from_display(Vec2::xy(100.0, 50.0)), Vec2::xy(5.0, 2.5));
    }

    #[test]
    fn test_draw_order_and_frame() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        axis.points(xy(&[0.0, 10.0], &[0.0, 10.0])).expect("operation should succeed");
        axis.update_tick_information();

        let mut rec = Recorder::new();
        axis.draw(&mut rec, 0.0);
        let commands = rec.commands();
        assert_eq!(commands[0], DrawCommand::StrokeWidth(3.0));
        assert_eq!(commands[1], DrawCommand::StrokeColor(Rgba::BLACK));
        // two axis lines plus ten tick marks
        assert_eq!(rec.lines().len(), 12);
        assert_eq!(rec.circles().len(), 2);
    }

    #[test]
    fn test_draw_animated() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        let index = axis.points(xy(&[0.0], &[0.0])).expect("operation should succeed");
        axis.add_frame(index, xy(&[1.0], &[1.0]), 1.0)
            .expect("operation should succeed");

        let mut rec = Recorder::new();
        axis.draw_animated(&mut rec);
        assert!(rec.commands().contains(&DrawCommand::EndAnimatedCircle));
    }

    #[test]
    fn test_set_dimensions() {
        let mut axis = Axis::new(Viewport::from_size(100.0, 100.0));
        axis.set_dimensions(300, 100);
        assert_eq!(axis.calculate_num_ticks(), (15, 5));
    }
}
