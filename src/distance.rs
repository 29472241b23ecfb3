//! Distance functions between two datapoints.
//!
//! A distance is a pure function `(before, after) -> f64` whose sign gives the
//! direction of the move and whose magnitude gives its size. The core only ever
//! compares signs and magnitudes, so any metric works as long as it is
//! consistent: absolute change, percentage change, log-return, ...
//!
//! Every `Fn(&D, &D) -> f64` is a [`Distance`], so closures and plain
//! functions can be handed to [`crate::compress`] directly.

use crate::point::Sample;

/// Signed distance between two datapoints of a series
pub trait Distance<D> {
    /// Distance from `before` to `after`
    ///
    /// Must be pure. Returning exactly `0.0` means "no movement".
    fn distance(&self, before: &D, after: &D) -> f64;
}

impl<D, F> Distance<D> for F
where
    F: Fn(&D, &D) -> f64,
{
    #[inline]
    fn distance(&self, before: &D, after: &D) -> f64 {
        self(before, after)
    }
}

/// Plain value change: `after - before`
#[inline]
#[must_use]
pub fn absolute(before: &Sample, after: &Sample) -> f64 {
    after.value - before.value
}

/// Change relative to the midpoint of both values, in percent
///
/// Symmetric: a move up and the reverse move down have equal magnitude.
#[inline]
#[must_use]
pub fn symmetric_percent(before: &Sample, after: &Sample) -> f64 {
    let (a, b) = (before.value, after.value);
    200.0 * (b - a) / (a + b)
}

/// Percentage move measured from the lower of the two values
///
/// Positive for a rise, negative for a fall. Assumes strictly positive values.
#[inline]
#[must_use]
pub fn percent(before: &Sample, after: &Sample) -> f64 {
    let (a, b) = (before.value, after.value);
    if b > a {
        100.0 * (b / a - 1.0)
    } else if b < a {
        -100.0 * (a / b - 1.0)
    } else {
        0.0
    }
}

/// Natural log-return `ln(after / before)`
///
/// Assumes strictly positive values.
#[inline]
#[must_use]
pub fn log_return(before: &Sample, after: &Sample) -> f64 {
    (after.value / before.value).ln()
}

#[inline]
pub(crate) fn same_direction(a: f64, b: f64) -> bool {
    (a < 0.0) == (b < 0.0)
}
