//! Histogram series.
//!
//! Raw samples go in through the x channel. The first frame picks the bin
//! count from the [`BinStrategy`]; later frames reuse that count so every
//! frame has the same number of bars and bars can be interpolated one to one.
//! Each bar is a rectangle from `y = 0` up to its count.

use super::frames::Keyframes;
use crate::axis::DisplayTransform;
use crate::backend::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{BBox, Limits};
use crate::grammar::{bin, Aesthetic, BinStrategy, DataWithAesthetic};
use log::trace;

/// A bar in pixel space.
pub type Bar = BBox<f32, 2>;

/// Keyframed histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    keyframes: Keyframes,
    widths: Vec<f32>,
    strategy: BinStrategy,
    bins: Option<usize>,
    color: Rgba,
}

impl Histogram {
    /// Empty histogram filled with `color`.
    #[must_use]
    pub fn new(strategy: BinStrategy, color: Rgba) -> Self {
        Self {
            keyframes: Keyframes::new(),
            widths: Vec::new(),
            strategy,
            bins: None,
            color,
        }
    }

    /// Bin the x samples of `data` and append the result at `time`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingAesthetic`] without an x channel, [`Error::EmptyData`]
    /// without finite samples, and any [`Keyframes::push`] error.
    pub fn add_frame(&mut self, data: DataWithAesthetic, time: f32) -> Result<()> {
        let samples = data
            .get(Aesthetic::X)
            .ok_or(Error::MissingAesthetic(Aesthetic::X))?;
        let strategy = self.bins.map_or(self.strategy, BinStrategy::Fixed);
        let bins = bin(samples, strategy)?;

        let count = bins.counts.len();
        let binned = DataWithAesthetic::new().x(&bins.centres).y(&bins.counts);
        self.keyframes.push(binned, time)?;
        self.widths.push(bins.width);
        self.bins.get_or_insert(count);
        Ok(())
    }

    /// Binned frames: x holds bin centres, y holds counts.
    #[must_use]
    pub fn keyframes(&self) -> &Keyframes {
        &self.keyframes
    }

    /// Bin count shared by every frame, once the first frame is stored.
    #[must_use]
    pub fn bin_count(&self) -> Option<usize> {
        self.bins
    }

    /// Fill color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Replace the fill color.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Extent of every bar in every frame, with the baseline included.
    #[must_use]
    pub fn limits(&self) -> Limits {
        let mut limits = Limits::empty();
        for (frame, &width) in self.keyframes.frames().iter().zip(&self.widths) {
            let frame_limits = frame.limits();
            let (x_min, x_max) = frame_limits.range(Aesthetic::X.index());
            let (_, y_max) = frame_limits.range(Aesthetic::Y.index());

            let mut bars = Limits::empty();
            bars.set_range(Aesthetic::X.index(), x_min - width / 2.0, x_max + width / 2.0);
            bars.set_range(Aesthetic::Y.index(), 0.0, y_max);
            limits = limits.union(&bars);
        }
        limits
    }

    /// Pixel rectangles of one stored frame.
    #[must_use]
    pub fn bars(&self, frame: usize, transform: &DisplayTransform) -> Vec<Bar> {
        let data = &self.keyframes.frames()[frame];
        let half = self.widths[frame] / 2.0;
        let centres = data.get(Aesthetic::X).unwrap_or_default();
        let counts = data.get(Aesthetic::Y).unwrap_or_default();

        centres
            .iter()
            .zip(counts)
            .map(|(&centre, &count)| {
                let a = transform.position(centre - half, 0.0);
                let b = transform.position(centre + half, count);
                BBox::new(a.component_min(&b), a.component_max(&b))
            })
            .collect()
    }

    /// Draw the bars as they appear at `time`.
    pub fn draw<B: Backend + ?Sized>(&self, backend: &mut B, transform: &DisplayTransform, time: f32) {
        let Some(info) = self.keyframes.frame_info(time) else {
            return;
        };

        let above = self.bars(info.frame_above, transform);
        let bars = if info.is_exact() {
            above
        } else {
            let below = self.bars(info.frame_above - 1, transform);
            above
                .iter()
                .zip(&below)
                .map(|(a, b)| {
                    BBox::new(
                        a.bmin * info.w1 + b.bmin * info.w2,
                        a.bmax * info.w1 + b.bmax * info.w2,
                    )
                })
                .collect()
        };
        trace!(target: "keyplot", "histogram: {} bars at t={time}", bars.len());

        backend.fill_color(self.color);
        for bar in bars {
            backend.rect(bar);
        }
    }

    /// Emit one animated rectangle chain per bin.
    pub fn draw_animated<B: AnimatedBackend + ?Sized>(
        &self,
        backend: &mut B,
        transform: &DisplayTransform,
    ) {
        let frames: Vec<Vec<Bar>> = (0..self.keyframes.len())
            .map(|frame| self.bars(frame, transform))
            .collect();

        backend.fill_color(self.color);
        for index in 0..self.bins.unwrap_or(0) {
            for (bars, &time) in frames.iter().zip(self.keyframes.times()) {
                backend.add_animated_rect(bars[index], time);
            }
            backend.end_animated_rect();
        }
    }
}
