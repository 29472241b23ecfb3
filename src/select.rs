//! Zigzag indicator reconstruction.
//!
//! An indicator at a given deviation is rebuilt from two sources: a scan of
//! the skeleton (which always holds the largest swings) and a recall of every
//! archived pair whose importance reaches the deviation. Neither source is
//! modified.

use serde::{Deserialize, Serialize};

use crate::archive::Archive;
use crate::skeleton::Skeleton;

/// One turning point of a zigzag indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint<D> {
    pub point: D,
    /// Size of the swing that made this point a turning point
    pub importance: f64,
}

impl<D> IndicatorPoint<D> {
    #[inline]
    pub const fn new(point: D, importance: f64) -> Self {
        Self { point, importance }
    }
}

/// Select the zigzag indicator whose turning points have importance `>= deviation`
///
/// Skeleton points come from [`select_from_skeleton`]; archived pairs at or
/// above `deviation` contribute both of their points. The result is sorted by
/// `order_key`, stably, so points with equal keys keep the order they were
/// found in.
///
/// When the skeleton scan finds nothing the archive is not consulted: the
/// skeleton always records the largest swing of the series, so no archived
/// pair can qualify either.
///
/// `deviation` is meant to be positive. `0.0` returns every point the
/// skeleton and the archive hold.
pub fn select<D, K, O>(
    skeleton: &Skeleton<D>,
    archive: &Archive<D>,
    deviation: f64,
    mut order_key: O,
) -> Vec<IndicatorPoint<D>>
where
    D: Clone,
    K: Ord,
    O: FnMut(&D) -> K,
{
    debug_assert!(!deviation.is_nan(), "deviation must not be NaN");

    let mut indicator = select_from_skeleton(skeleton, deviation);
    if indicator.is_empty() {
        return indicator;
    }

    indicator.extend(archive.at_least(deviation).flat_map(|pair| {
        [
            IndicatorPoint::new(pair.first.clone(), pair.importance),
            IndicatorPoint::new(pair.second.clone(), pair.importance),
        ]
    }));
    indicator.sort_by_key(|z| order_key(&z.point));
    indicator
}

/// Turning points found in the skeleton alone, in skeleton order
///
/// Skeleton magnitudes rise, peak, then fall. The scan looks for the first
/// move reaching `deviation` and emits the vertex it starts from, every vertex
/// of the rising run, the peak, and then each vertex of the falling run while
/// its move still reaches `deviation`.
///
/// If the leading magnitudes start falling before any of them reaches
/// `deviation`, the scan gives up and returns nothing, even if a later move
/// would qualify.
#[must_use]
pub fn select_from_skeleton<D: Clone>(skeleton: &Skeleton<D>, deviation: f64) -> Vec<IndicatorPoint<D>> {
    let s = skeleton.entries();
    let n = s.len();
    let mut out = Vec::new();
    if n < 2 {
        return out;
    }

    let mut i = 1;
    let mut d1 = s[1].magnitude();
    while d1 < deviation {
        let d0 = d1;
        i += 1;
        if i == n {
            return out;
        }
        d1 = s[i].magnitude();
        if d0 > d1 {
            return out;
        }
    }

    // s[i] is the first move reaching deviation
    out.push(IndicatorPoint::new(s[i - 1].point.clone(), d1));
    i += 1;
    if i == n {
        out.push(IndicatorPoint::new(s[i - 1].point.clone(), d1));
        return out;
    }

    let mut d0 = d1;
    d1 = s[i].magnitude();
    while d0 < d1 {
        out.push(IndicatorPoint::new(s[i - 1].point.clone(), d1));
        i += 1;
        if i == n {
            out.push(IndicatorPoint::new(s[i - 1].point.clone(), d1));
            return out;
        }
        d0 = d1;
        d1 = s[i].magnitude();
    }

    // peak
    out.push(IndicatorPoint::new(s[i - 1].point.clone(), d0));
    while d1 >= deviation {
        out.push(IndicatorPoint::new(s[i].point.clone(), d1));
        i += 1;
        if i == n {
            break;
        }
        d1 = s[i].magnitude();
    }
    out
}

/// Narrow an indicator selected at a lower deviation down to `deviation`
///
/// For a series of thresholds `d0 < d1 < d2 < ...` select once at `d0` and
/// refine the result for the others instead of selecting again.
#[must_use]
pub fn refine<D: Clone>(indicator: &[IndicatorPoint<D>], deviation: f64) -> Vec<IndicatorPoint<D>> {
    indicator
        .iter()
        .filter(|z| z.importance >= deviation)
        .cloned()
        .collect()
}

/// Distinct importances present in an indicator, largest first
#[must_use]
pub fn importance_levels<D>(indicator: &[IndicatorPoint<D>]) -> Vec<f64> {
    let mut levels: Vec<f64> = indicator.iter().map(|z| z.importance).collect();
    levels.sort_by(|a, b| b.total_cmp(a));
    levels.dedup();
    levels
}
