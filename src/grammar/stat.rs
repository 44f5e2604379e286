//! Statistical transformations applied to a frame before it is stored.
//!
//! Supports automatic binning with Sturges, Scott, and Freedman-Diaconis rules.

use super::aes::Aesthetic;
use super::data::{extent, DataWithAesthetic};
use crate::error::{Error, Result};

/// Binning strategy for histograms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BinStrategy {
    /// Sturges' rule: ceil(log2(n) + 1)
    #[default]
    Sturges,
    /// Scott's rule: 3.5 * std / n^(1/3)
    Scott,
    /// Freedman-Diaconis rule: 2 * IQR / n^(1/3)
    FreedmanDiaconis,
    /// Fixed number of bins
    Fixed(usize),
}

impl BinStrategy {
    /// Number of bins this rule picks for `samples` (at least one).
    #[must_use]
    pub fn bin_count(self, samples: &[f32]) -> usize {
        let n = samples.len();
        if n == 0 {
            return 1;
        }
        let sturges = || ((n as f32).log2().ceil() + 1.0) as usize;

        let count = match self {
            Self::Sturges => sturges(),
            Self::Scott => {
                let width = 3.5 * std_dev(samples) / (n as f32).powf(1.0 / 3.0);
                by_width(range(samples), width).unwrap_or_else(sturges)
            }
            Self::FreedmanDiaconis => {
                let width = 2.0 * iqr(samples) / (n as f32).powf(1.0 / 3.0);
                by_width(range(samples), width).unwrap_or_else(sturges)
            }
            Self::Fixed(bins) => bins,
        };
        count.max(1)
    }
}

fn by_width(range: f32, width: f32) -> Option<usize> {
    (width > 0.0 && width.is_finite()).then(|| (range / width).ceil() as usize)
}

fn range(samples: &[f32]) -> f32 {
    extent(samples).map_or(0.0, |(min, max)| max - min)
}

fn std_dev(samples: &[f32]) -> f32 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (samples.len() - 1) as f32;
    variance.sqrt()
}

fn iqr(samples: &[f32]) -> f32 {
    if samples.len() < 4 {
        return range(samples);
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f32::total_cmp);
    sorted[3 * sorted.len() / 4] - sorted[sorted.len() / 4]
}

/// Result of binning a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    /// Bin centres.
    pub centres: Vec<f32>,
    /// Sample count per bin.
    pub counts: Vec<f32>,
    /// Width of every bin.
    pub width: f32,
}

/// Bin `samples` into equal-width bins spanning their finite extent.
///
/// The last bin is closed on the right so the maximum is counted. A sample
/// set with a single distinct value gets bins spanning one unit around it.
///
/// # Errors
///
/// Returns [`Error::EmptyData`] if `samples` has no finite values.
pub fn bin(samples: &[f32], strategy: BinStrategy) -> Result<Bins> {
    let (mut min, mut max) = extent(samples).ok_or(Error::EmptyData)?;
    if max <= min {
        min -= 0.5;
        max += 0.5;
    }

    let count = strategy.bin_count(samples);
    let width = (max - min) / count as f32;

    let mut counts = vec![0.0_f32; count];
    for &value in samples.iter().filter(|v| v.is_finite()) {
        let bin = (((value - min) / width).floor() as usize).min(count - 1);
        counts[bin] += 1.0;
    }

    let centres = (0..count)
        .map(|i| min + (i as f32 + 0.5) * width)
        .collect();

    Ok(Bins { centres, counts, width })
}

/// Statistical transformation type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Stat {
    /// No transformation.
    #[default]
    Identity,
    /// Bin the x channel; output x = bin centres, y = counts.
    Bin(BinStrategy),
}

impl Stat {
    /// Transform a frame.
    ///
    /// # Errors
    ///
    /// Binning fails with [`Error::MissingAesthetic`] when the frame has no x
    /// channel and [`Error::EmptyData`] when it has no finite x values.
    pub fn apply(&self, data: &DataWithAesthetic) -> Result<DataWithAesthetic> {
        match self {
            Self::Identity => Ok(data.clone()),
            Self::Bin(strategy) => {
                let samples = data
                    .get(Aesthetic::X)
                    .ok_or(Error::MissingAesthetic(Aesthetic::X))?;
                let bins = bin(samples, *strategy)?;
                Ok(DataWithAesthetic::new().x(&bins.centres).y(&bins.counts))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sturges() {
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        assert_eq!(BinStrategy::Sturges.bin_count(&data), 5);
        assert_eq!(BinStrategy::Fixed(0).bin_count(&data), 1);
        assert_eq!(BinStrategy::Sturges.bin_count(&[]), 1);
    }

    #[test]
    fn test_scott_and_fd_fall_back_on_constant_data() {
        let data = [2.0; 8];
        assert_eq!(BinStrategy::Scott.bin_count(&data), 4);
        assert_eq!(BinStrategy::FreedmanDiaconis.bin_count(&data), 4);
    }

    #[test]
    fn test_bin_counts_every_sample() {
        let data = [0.0, 0.5, 1.0, 1.5, 2.0, 4.0];
        let bins = bin(&data, BinStrategy::Fixed(4)).expect("operation should succeed");
        assert_eq!(bins.width, 1.0);
        assert_eq!(bins.centres, vec![0.5, 1.5, 2.5, 3.5]);
        assert_eq!(bins.counts, vec![2.0, 2.0, 1.0, 1.0]);
        assert_eq!(bins.counts.iter().sum::<f32>(), data.len() as f32);
    }

    #[test]
    fn test_bin_single_value() {
        let bins = bin(&[3.0, 3.0], BinStrategy::Fixed(2)).expect("operation should succeed");
        assert_eq!(bins.centres, vec![2.75, 3.25]);
        assert_eq!(bins.counts, vec![0.0, 2.0]);
    }

    #[test]
    fn test_bin_empty() {
        assert!(matches!(bin(&[], BinStrategy::Sturges), Err(Error::EmptyData)));
        assert!(matches!(bin(&[f32::NAN], BinStrategy::Sturges), Err(Error::EmptyData)));
    }

    #[test]
    fn test_stat_apply() {
        let frame = DataWithAesthetic::new().x(&[0.0, 1.0, 1.0, 2.0]);
        let binned = Stat::Bin(BinStrategy::Fixed(2))
            .apply(&frame)
            .expect("operation should succeed");
        assert_eq!(binned.get(Aesthetic::X), Some(&[0.5, 1.5][..]));
        assert_eq!(binned.get(Aesthetic::Y), Some(&[1.0, 3.0][..]));

        let same = Stat::Identity.apply(&frame).expect("operation should succeed");
        assert_eq!(same, frame);

        let no_x = DataWithAesthetic::new().y(&[1.0]);
        assert!(Stat::Bin(BinStrategy::Sturges).apply(&no_x).is_err());
    }
}
