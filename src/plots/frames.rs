//! Timestamped frame storage and interpolation weights.

use crate::axis::{DisplayTransform, PixelFrame};
use crate::error::{Error, Result};
use crate::geometry::Limits;
use crate::grammar::{Aesthetic, DataWithAesthetic};
use log::trace;

/// Channels every stored frame must carry.
pub const REQUIRED: [Aesthetic; 2] = [Aesthetic::X, Aesthetic::Y];

/// Which stored frames to draw at a given time, and with what weights.
///
/// The drawn frame is `w1 * frames[frame_above] + w2 * frames[frame_above - 1]`.
/// When `w2` is zero the previous frame is never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Earliest frame whose time is not before the requested time, clamped
    /// to the last frame.
    pub frame_above: usize,
    /// Weight of `frame_above`.
    pub w1: f32,
    /// Weight of the frame before it.
    pub w2: f32,
}

impl FrameInfo {
    const fn exact(frame: usize) -> Self {
        Self {
            frame_above: frame,
            w1: 1.0,
            w2: 0.0,
        }
    }

    /// True if a single frame is drawn unblended.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.w2 == 0.0
    }
}

/// Ordered frames with strictly increasing timestamps and a shared row count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyframes {
    frames: Vec<DataWithAesthetic>,
    times: Vec<f32>,
}

impl Keyframes {
    /// Empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAesthetic`] / [`Error::ColumnLength`] for a malformed frame
    /// - [`Error::RowCountMismatch`] if the row count differs from the first frame
    /// - [`Error::InvalidTime`] for a non-finite time
    /// - [`Error::NonIncreasingTime`] unless `time` is after the last stored time
    pub fn push(&mut self, data: DataWithAesthetic, time: f32) -> Result<()> {
        let rows = data.validate(&REQUIRED)?;

        if let Some(expected) = self.frames.first().map(DataWithAesthetic::rows) {
            if rows != expected {
                return Err(Error::RowCountMismatch {
                    expected,
                    found: rows,
                });
            }
        }
        if !time.is_finite() {
            return Err(Error::InvalidTime(time));
        }
        if let Some(&previous) = self.times.last() {
            if time <= previous {
                return Err(Error::NonIncreasingTime { previous, time });
            }
        }

        self.frames.push(data);
        self.times.push(time);
        Ok(())
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frame has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Stored frames in time order.
    #[must_use]
    pub fn frames(&self) -> &[DataWithAesthetic] {
        &self.frames
    }

    /// Stored timestamps.
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Rows per frame (0 when empty).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.frames.first().map_or(0, DataWithAesthetic::rows)
    }

    /// Union of every frame's limits.
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.frames
            .iter()
            .fold(Limits::empty(), |acc, frame| acc.union(&frame.limits()))
    }

    /// Frame index and weights for time `t`, or `None` with no frames.
    ///
    /// Times before the first frame clamp to it, times after the last clamp
    /// to the last. An exact timestamp match selects that frame alone.
    #[must_use]
    pub fn frame_info(&self, t: f32) -> Option<FrameInfo> {
        if self.times.is_empty() {
            return None;
        }

        let above = self.times.partition_point(|&ti| ti < t);
        let info = if above == self.times.len() {
            FrameInfo::exact(above - 1)
        } else if above == 0 || self.times[above] == t {
            FrameInfo::exact(above)
        } else {
            let previous = self.times[above - 1];
            let w1 = (t - previous) / (self.times[above] - previous);
            FrameInfo {
                frame_above: above,
                w1,
                w2: 1.0 - w1,
            }
        };

        trace!(target: "keyplot", "t={t} -> {info:?}");
        Some(info)
    }

    /// The frame to draw at `time`, already in pixel space.
    #[must_use]
    pub fn pixel_frame_at(&self, time: f32, transform: &DisplayTransform) -> Option<PixelFrame> {
        let info = self.frame_info(time)?;
        let above = transform.pixel_frame(&self.frames[info.frame_above]);
        if info.is_exact() {
            return Some(above);
        }

        let below = transform.pixel_frame(&self.frames[info.frame_above - 1]);
        Some(PixelFrame::blend(&above, info.w1, &below, info.w2))
    }

    /// Every frame in pixel space, paired with its time.
    #[must_use]
    pub fn pixel_frames(&self, transform: &DisplayTransform) -> Vec<(PixelFrame, f32)> {
        self.frames
            .iter()
            .zip(&self.times)
            .map(|(frame, &time)| (transform.pixel_frame(frame), time))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame(x: &[f32]) -> DataWithAesthetic {
        DataWithAesthetic::new().x(x).y(x)
    }

    fn two_frames() -> Keyframes {
        let mut kf = Keyframes::new();
        kf.push(frame(&[0.0, 1.0]), 0.0).expect("operation should succeed");
        kf.push(frame(&[2.0, 3.0]), 1.0).expect("operation should succeed");
        kf
    }

    #[test]
    fn test_empty() {
        let kf = Keyframes::new();
        assert!(kf.frame_info(0.0).is_none());
        assert_eq!(kf.rows(), 0);
        assert!(kf.limits().is_empty());
    }

    #[test]
    fn test_push_rejects_bad_frames() {
        let mut kf = two_frames();
        assert!(matches!(
            kf.push(frame(&[1.0]), 2.0),
            Err(Error::RowCountMismatch { expected: 2, found: 1 })
        ));
        assert!(matches!(
            kf.push(frame(&[1.0, 2.0]), 1.0),
            Err(Error::NonIncreasingTime { .. })
        ));
        assert!(matches!(
            kf.push(frame(&[1.0, 2.0]), f32::NAN),
            Err(Error::InvalidTime(_))
        ));
        assert!(matches!(
            kf.push(DataWithAesthetic::new().x(&[1.0, 2.0]), 2.0),
            Err(Error::MissingAesthetic(Aesthetic::Y))
        ));
        assert_eq!(kf.len(), 2);
    }

    #[test]
    fn test_frame_info_between() {
        let info = two_frames().frame_info(0.25).expect("operation should succeed");
        assert_eq!(info.frame_above, 1);
        assert_relative_eq!(info.w1, 0.25);
        assert_relative_eq!(info.w2, 0.75);
    }

    #[test]
    fn test_frame_info_clamps() {
        let kf = two_frames();
        assert_eq!(kf.frame_info(-3.0), Some(FrameInfo::exact(0)));
        assert_eq!(kf.frame_info(0.0), Some(FrameInfo::exact(0)));
        assert_eq!(kf.frame_info(1.0), Some(FrameInfo::exact(1)));
        assert_eq!(kf.frame_info(9.0), Some(FrameInfo::exact(1)));
    }

    #[test]
    fn test_limits_cover_all_frames() {
        let limits = two_frames().limits();
        assert_eq!(limits.range(0), (0.0, 3.0));
        assert_eq!(limits.range(1), (0.0, 3.0));
    }
}
