//! Per-channel frequency tables.
//!
//! A greyscale image (every pixel has equal channels) yields a single table;
//! any other image yields red, green, blue and intensity tables in that order.

use std::fmt;

use crate::image::{Channel, PixelGrid, Sample};

/// Number of buckets, one per channel value.
pub const BUCKETS: usize = 256;

/// Derived channel a histogram was built over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HistogramChannel {
    /// The single table of a greyscale image (built over its red channel).
    Grey,
    Red,
    Green,
    Blue,
    /// Rounded mean of the three channels.
    Intensity,
}

impl HistogramChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistogramChannel::Grey => "grey",
            HistogramChannel::Red => "red",
            HistogramChannel::Green => "green",
            HistogramChannel::Blue => "blue",
            HistogramChannel::Intensity => "intensity",
        }
    }

    fn sample_value(&self, px: &Sample) -> u8 {
        match self {
            HistogramChannel::Grey | HistogramChannel::Red => px.channel(Channel::Red),
            HistogramChannel::Green => px.channel(Channel::Green),
            HistogramChannel::Blue => px.channel(Channel::Blue),
            HistogramChannel::Intensity => px.intensity(),
        }
    }
}

impl fmt::Display for HistogramChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 256-bucket frequency table for one derived channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    channel: HistogramChannel,
    counts: [u64; BUCKETS],
}

impl Histogram {
    /// Counts `channel` over every pixel of `grid`.
    pub fn from_grid(grid: &PixelGrid, channel: HistogramChannel) -> Self {
        let mut counts = [0u64; BUCKETS];
        for px in grid.samples() {
            counts[usize::from(channel.sample_value(px))] += 1;
        }
        Self { channel, counts }
    }

    pub fn channel(&self) -> HistogramChannel {
        self.channel
    }

    /// Returns all 256 buckets.
    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Occurrences of `value`.
    pub fn count(&self, value: u8) -> u64 {
        self.counts[usize::from(value)]
    }

    /// Sum of all buckets (the pixel count of the source image).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bucket, useful for normalizing a plot.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Builds the histogram set for `grid`.
pub fn build_histograms(grid: &PixelGrid) -> Vec<Histogram> {
    let channels: &[HistogramChannel] = if grid.is_greyscale() {
        &[HistogramChannel::Grey]
    } else {
        &[
            HistogramChannel::Red,
            HistogramChannel::Green,
            HistogramChannel::Blue,
            HistogramChannel::Intensity,
        ]
    };
    channels
        .iter()
        .map(|&channel| Histogram::from_grid(grid, channel))
        .collect()
}
