//! Span and event macros for store and codec operations.
//!
//! Every public operation on [`crate::ImageStore`] and the PPM codec opens a
//! span named after itself (`brighten`, `convolve`, `decode_ppm`, ...) with
//! the image dimensions as fields, and reports one event carrying its result
//! measurement (pixel count, kernel size, number of histogram tables).
//!
//! With the `tracing` feature the macros expand to `tracing` calls at info
//! level. Without it nothing is recorded: spans become [`NoopSpan`] and event
//! fields are evaluated once and dropped, so call sites never need `#[cfg]`.
//! Keep event fields cheap for that reason.

/// Opens an info-level span: `trace_span!("sepia", width = w).entered()`.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Records an info-level event: `trace_event!("flipped", pixels = n)`.
///
/// Fields must be `key = expr` pairs; `tracing`'s `%`/`?` sigils are not
/// accepted because the disabled form has to evaluate them as expressions.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard for builds without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered` so the guard binding compiles unchanged.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
