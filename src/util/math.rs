//! Rounding and clamping helpers shared by the per-pixel transforms.

/// Rounds to the nearest integer (halves away from zero) and clamps to [0, 255].
#[inline]
pub(crate) fn round_clamp_u8(value: f64) -> u8 {
    let rounded = value.round();
    if rounded >= 255.0 {
        255
    } else if rounded <= 0.0 || rounded.is_nan() {
        0
    } else {
        rounded as u8
    }
}

/// Saturating add of a signed delta to a channel value.
#[inline]
pub(crate) fn saturating_offset(value: u8, delta: i32) -> u8 {
    (i32::from(value).saturating_add(delta)).clamp(0, 255) as u8
}

/// Mean of three channels rounded to the nearest integer.
#[inline]
pub(crate) fn mean3_rounded(a: u8, b: u8, c: u8) -> u8 {
    let sum = u16::from(a) + u16::from(b) + u16::from(c);
    round_clamp_u8(f64::from(sum) / 3.0)
}
