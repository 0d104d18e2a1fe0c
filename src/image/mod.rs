//! Color samples and pixel grids.
//!
//! A [`Sample`] is one RGB observation with 8-bit channels. A [`PixelGrid`]
//! stores samples contiguously in row-major order; once built it is never
//! edited in place, every transform produces a fresh grid.

use std::fmt;

use crate::util::{ImgProcError, ImgProcResult};

mod grid;
#[cfg(feature = "image-io")]
pub mod io;

pub use grid::PixelGrid;

/// One of the three stored color channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// A single RGB color value with channels in [0, 255].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sample {
    red: u8,
    green: u8,
    blue: u8,
}

impl Sample {
    /// Creates a sample from wide integers, rejecting channels outside [0, 255].
    pub fn new(red: i64, green: i64, blue: i64) -> ImgProcResult<Self> {
        let in_range = |value: i64| (0..=255).contains(&value);
        if !(in_range(red) && in_range(green) && in_range(blue)) {
            return Err(ImgProcError::InvalidChannelValue { red, green, blue });
        }
        Ok(Self::from_rgb(red as u8, green as u8, blue as u8))
    }

    /// Creates a sample from channels that are already in range.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a sample with all three channels set to `value`.
    pub const fn grey(value: u8) -> Self {
        Self::from_rgb(value, value, value)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns `[red, green, blue]`.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Largest of the three channel values.
    pub fn max_channel(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    /// Channel holding the largest value.
    ///
    /// Ties resolve by precedence red, then blue, then green.
    pub fn dominant_channel(&self) -> Channel {
        let max = self.max_channel();
        if max == self.red {
            Channel::Red
        } else if max == self.blue {
            Channel::Blue
        } else {
            Channel::Green
        }
    }

    /// True when all three channels carry the same value.
    pub fn is_grey(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Mean of the three channels, rounded to the nearest integer.
    pub fn intensity(&self) -> u8 {
        crate::util::math::mean3_rounded(self.red, self.green, self.blue)
    }

    /// Adds `delta` to every channel, saturating at 0 and 255.
    pub fn offset(&self, delta: i32) -> Self {
        use crate::util::math::saturating_offset;
        Self::from_rgb(
            saturating_offset(self.red, delta),
            saturating_offset(self.green, delta),
            saturating_offset(self.blue, delta),
        )
    }
}

impl From<[u8; 3]> for Sample {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}
