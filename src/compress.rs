//! Online skeleton building.
//!
//! Each incoming point either stalls (zero distance, dropped), extends the
//! current trend (replaces the last extremum) or reverses it (appends a new
//! extremum). After every structural change the tail of the skeleton is folded:
//! while the second-to-last move is no larger than both of its neighbours, that
//! extremum pair is moved to the archive. Folds cascade until the tail is
//! locally significant again.

use serde::{Deserialize, Serialize};

use crate::archive::{Archive, FoldedPair};
use crate::distance::{same_direction, Distance};
use crate::select::{select, IndicatorPoint};
use crate::skeleton::{Entry, Skeleton};

/// Skeleton and archive of one logical series
///
/// Returned by [`compress`] and accepted back by it to continue the same
/// series: points passed to the next call are taken to follow the skeleton's
/// last point immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compressed<D> {
    pub skeleton: Skeleton<D>,
    pub archive: Archive<D>,
}

impl<D> Compressed<D> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skeleton: Skeleton::new(),
            archive: Archive::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_parts(skeleton: Skeleton<D>, archive: Archive<D>) -> Self {
        Self { skeleton, archive }
    }

    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Skeleton<D>, Archive<D>) {
        (self.skeleton, self.archive)
    }

    /// Zigzag indicator at `deviation`, see [`select`]
    pub fn select<K, O>(&self, deviation: f64, order_key: O) -> Vec<IndicatorPoint<D>>
    where
        D: Clone,
        K: Ord,
        O: FnMut(&D) -> K,
    {
        select(&self.skeleton, &self.archive, deviation, order_key)
    }
}

impl<D> Default for Compressed<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress `points` into `state` and return the updated state
///
/// Pass `Compressed::new()` to start a series, or a previously returned state
/// to continue it. `points` is consumed exactly once, front to back.
///
/// Short input is not an error: fewer than two distinct points leave a
/// skeleton of length 0 or 1.
///
/// # Example
/// ```
/// use zigzag_skeleton::{compress, distance, Compressed, Sample};
///
/// let series = [1.0, 4.0, 2.0, 4.0, 3.0, 7.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| Sample::new(i as u64 + 1, v));
///
/// let state = compress(series, &distance::absolute, Compressed::new());
/// assert_eq!(state.skeleton.len(), 2);
/// assert_eq!(state.archive.len(), 2);
/// ```
pub fn compress<D, F, I>(points: I, distance: &F, mut state: Compressed<D>) -> Compressed<D>
where
    I: IntoIterator<Item = D>,
    F: Distance<D> + ?Sized,
{
    for point in points {
        push(&mut state, point, distance);
    }
    state
}

/// Feed a single point into `state`
pub(crate) fn push<D, F>(state: &mut Compressed<D>, point: D, distance: &F)
where
    F: Distance<D> + ?Sized,
{
    let Compressed { skeleton, archive } = state;
    let entries = skeleton.entries_mut();

    // Bootstrap: an anchor, then the first point that actually moves away from it
    match entries.as_slice() {
        [] => {
            entries.push(Entry::anchor(point));
            return;
        }
        [anchor] => {
            let d = distance.distance(&anchor.point, &point);
            if d != 0.0 {
                entries.push(Entry::new(point, d));
            }
            return;
        }
        _ => {}
    }

    let n = entries.len();
    let d = distance.distance(&entries[n - 1].point, &point);
    if d == 0.0 {
        return;
    }

    if same_direction(entries[n - 1].diff, d) {
        // The old last point was not an extreme after all
        let diff = distance.distance(&entries[n - 2].point, &point);
        entries[n - 1] = Entry::new(point, diff);
    } else {
        entries.push(Entry::new(point, d));
    }

    fold(entries, archive, distance);
}

/// Remove locally insignificant extremum pairs from the tail
fn fold<D, F>(entries: &mut Vec<Entry<D>>, archive: &mut Archive<D>, distance: &F)
where
    F: Distance<D> + ?Sized,
{
    while entries.len() >= 4 {
        let n = entries.len();
        let importance = entries[n - 2].magnitude();
        if importance > entries[n - 3].magnitude() || importance > entries[n - 1].magnitude() {
            break;
        }

        // [.., e, first, second, last] -> [.., e, last]
        let first = entries.swap_remove(n - 3);
        let Some(second) = entries.pop() else {
            break;
        };
        log::trace!("folded extremum pair, importance {importance}");
        archive.push(FoldedPair::new(first.point, second.point, importance));

        let diff = distance.distance(&entries[n - 4].point, &entries[n - 3].point);
        entries[n - 3].diff = diff;
    }
}

/// Incremental compressor bound to one distance function
///
/// The configuration object of the crate: choose the metric once, then feed
/// points as they arrive. Equivalent to repeated [`compress`] calls.
///
/// ```
/// use zigzag_skeleton::{distance, Compressor, Sample};
///
/// let mut zz = Compressor::new(distance::absolute);
/// for (i, v) in [1.0, 5.0, 2.0, 8.0].into_iter().enumerate() {
///     zz.push(Sample::new(i as u64, v));
/// }
/// let indicator = zz.select(4.0, Sample::key);
/// assert!(!indicator.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Compressor<D, F> {
    distance: F,
    state: Compressed<D>,
}

impl<D, F: Distance<D>> Compressor<D, F> {
    #[must_use]
    pub fn new(distance: F) -> Self {
        Self::resume(distance, Compressed::new())
    }

    /// Continue a series from a previously returned state
    ///
    /// `state` must have been built with the same distance function.
    #[must_use]
    pub fn resume(distance: F, state: Compressed<D>) -> Self {
        Self { distance, state }
    }

    #[inline]
    pub fn push(&mut self, point: D) {
        push(&mut self.state, point, &self.distance);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &Compressed<D> {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn skeleton(&self) -> &Skeleton<D> {
        &self.state.skeleton
    }

    #[inline]
    #[must_use]
    pub fn archive(&self) -> &Archive<D> {
        &self.state.archive
    }

    #[inline]
    #[must_use]
    pub fn distance(&self) -> &F {
        &self.distance
    }

    #[must_use]
    pub fn into_state(self) -> Compressed<D> {
        self.state
    }

    /// Re-evaluate every magnitude under `distance` and continue with it
    #[must_use]
    pub fn recompress<G: Distance<D>>(self, distance: G) -> Compressor<D, G> {
        let mut state = self.state;
        crate::recompress::recompress(&distance, Some(&mut state.skeleton), &mut state.archive);
        Compressor { distance, state }
    }

    /// Zigzag indicator at `deviation`, see [`select`]
    pub fn select<K, O>(&self, deviation: f64, order_key: O) -> Vec<IndicatorPoint<D>>
    where
        D: Clone,
        K: Ord,
        O: FnMut(&D) -> K,
    {
        self.state.select(deviation, order_key)
    }
}

impl<D, F: Distance<D>> Extend<D> for Compressor<D, F> {
    fn extend<I: IntoIterator<Item = D>>(&mut self, points: I) {
        for point in points {
            self.push(point);
        }
    }
}
