//! Plain-text PPM (`P3`) reader and writer.
//!
//! Layout: the magic token `P3`, the width and height, a maximum channel
//! value, then `width * height` red/green/blue triples in row-major order.
//! Tokens are separated by any whitespace. Lines starting with `#` are
//! comments and are dropped before tokenizing; any other empty line is an
//! error. The maximum value is parsed but channels are only checked against
//! the fixed [0, 255] range.

use std::fmt;
use std::str::FromStr;

use crate::image::{PixelGrid, Sample};
use crate::trace::{trace_event, trace_span};
use crate::util::{ImgProcError, ImgProcResult};

const MAGIC: &str = "P3";

/// Upper bound on the pixel buffer reserved before any data is read.
const MAX_PREALLOC: usize = 1 << 20;

/// Parses plain-text PPM into a grid.
pub fn decode(text: &str) -> ImgProcResult<PixelGrid> {
    let _span = trace_span!("decode_ppm", bytes = text.len()).entered();

    let lines = content_lines(text)?;
    let mut tokens = Tokens::new(lines.iter().flat_map(|line| line.split_whitespace()));

    let magic = tokens.next_token("magic number")?;
    if magic != MAGIC {
        return Err(ImgProcError::malformed("plain RAW file should begin with P3"));
    }
    let width: usize = tokens.next_int("width")?;
    let height: usize = tokens.next_int("height")?;
    if width == 0 || height == 0 {
        return Err(ImgProcError::malformed(format!(
            "width and height must be positive, got {width}x{height}"
        )));
    }
    let max_value: i64 = tokens.next_int("maximum value")?;

    let len = width
        .checked_mul(height)
        .ok_or_else(|| ImgProcError::malformed("image dimensions overflow"))?;
    let mut data = Vec::with_capacity(len.min(MAX_PREALLOC));
    for _ in 0..len {
        let red = tokens.next_int("red channel")?;
        let green = tokens.next_int("green channel")?;
        let blue = tokens.next_int("blue channel")?;
        data.push(Sample::new(red, green, blue)?);
    }

    trace_event!("ppm_decoded", width = width, height = height, max_value = max_value);
    PixelGrid::new(data, width, height)
}

/// Serializes a grid as plain-text PPM.
///
/// The header maximum is the largest channel value present in the grid.
pub fn encode(grid: &PixelGrid) -> String {
    let _span = trace_span!("encode_ppm", width = grid.width(), height = grid.height()).entered();
    PpmText(grid).to_string()
}

/// Display adapter that renders a grid as plain-text PPM.
pub struct PpmText<'a>(pub &'a PixelGrid);

impl fmt::Display for PpmText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0;
        writeln!(f, "{MAGIC}")?;
        writeln!(f, "{} {}", grid.width(), grid.height())?;
        writeln!(f, "{}", grid.max_channel_value())?;
        for px in grid.samples() {
            writeln!(f, "{px}")?;
        }
        Ok(())
    }
}

/// Returns the non-comment lines, rejecting blank ones.
fn content_lines(text: &str) -> ImgProcResult<Vec<&str>> {
    let mut lines = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            return Err(ImgProcError::malformed(
                "plain RAW file should not have blank lines",
            ));
        }
        if !line.starts_with('#') {
            lines.push(line);
        }
    }
    Ok(lines)
}

struct Tokens<I> {
    inner: I,
}

impl<'a, I: Iterator<Item = &'a str>> Tokens<I> {
    fn new(inner: I) -> Self {
        Self { inner }
    }

    fn next_token(&mut self, what: &str) -> ImgProcResult<&'a str> {
        self.inner.next().ok_or_else(|| {
            ImgProcError::malformed(format!("unexpected end of data while reading {what}"))
        })
    }

    fn next_int<T: FromStr>(&mut self, what: &str) -> ImgProcResult<T> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            ImgProcError::malformed(format!("expected an integer for {what}, found `{token}`"))
        })
    }
}
