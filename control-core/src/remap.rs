//! Truncating integer linear interpolation.
//!
//! Both conditioning stages of an axis go through [`remap()`]. The target
//! upper bound is inclusive: the span is widened by one before the division
//! so that the last input step still lands on the upper bound. Division
//! truncates toward zero, which leaves a small quantization bias near the
//! edges of a range.

/// Linearly map `value` from the domain `from = (d0, d1)` into `to = (t0, t1)`.
///
/// Computes `t0 + (value - d0) * (t1 - t0 + 1) / (d1 - d0)` in `i64` and
/// saturates the result into `i32`, so wide converters and wide target
/// ranges never overflow. Inputs outside the domain extrapolate along the
/// same line.
///
/// A degenerate domain (`d0 == d1`) maps everything to `t0`.
///
/// # Example
///
/// ```
/// use control_core::remap;
///
/// assert_eq!(remap(512, (0, 1024), (-255, 255)), 0);
/// assert_eq!(remap(0, (0, 1024), (-255, 255)), -255);
/// assert_eq!(remap(1024, (0, 1024), (-255, 255)), 256);
/// ```
#[inline]
#[must_use]
pub fn remap(value: i32, from: (i32, i32), to: (i32, i32)) -> i32 {
    let (d0, d1) = (i64::from(from.0), i64::from(from.1));
    let (t0, t1) = (i64::from(to.0), i64::from(to.1));
    let span = d1 - d0;
    if span == 0 {
        return to.0;
    }
    let scaled = (i64::from(value) - d0).saturating_mul(t1 - t0 + 1) / span;
    t0.saturating_add(scaled)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
