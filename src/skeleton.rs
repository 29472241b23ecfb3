//! The skeleton: an alternating sequence of locally significant extrema.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One retained extremum and the signed distance from its predecessor
///
/// The first entry of a skeleton is the anchor; its `diff` is always `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry<D> {
    pub point: D,
    pub diff: f64,
}

impl<D> Entry<D> {
    #[inline]
    pub const fn new(point: D, diff: f64) -> Self {
        Self { point, diff }
    }

    #[inline]
    pub(crate) const fn anchor(point: D) -> Self {
        Self { point, diff: 0.0 }
    }

    /// Absolute size of the move into this entry
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.diff.abs()
    }
}

/// Ordered sequence of extrema retained after folding
///
/// Maintained by [`crate::compress`]:
/// - consecutive non-anchor diffs alternate in sign;
/// - no interior diff magnitude is `<=` both of its neighbours.
///
/// Only [`crate::compress`] and [`crate::recompress`] mutate a skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skeleton<D> {
    entries: Vec<Entry<D>>,
}

impl<D> Skeleton<D> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry<D>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<D>> {
        self.entries.iter()
    }

    /// Retained datapoints in series order
    pub fn points(&self) -> impl Iterator<Item = &D> + '_ {
        self.entries.iter().map(|e| &e.point)
    }

    /// Largest diff magnitude, i.e. the largest swing of the whole series
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.entries.iter().map(Entry::magnitude).fold(0.0, f64::max)
    }

    /// Whether consecutive non-anchor diffs strictly alternate in sign
    #[must_use]
    pub fn is_alternating(&self) -> bool {
        self.entries
            .get(1..)
            .unwrap_or_default()
            .windows(2)
            .all(|w| (w[0].diff < 0.0) != (w[1].diff < 0.0) && w[0].diff != 0.0 && w[1].diff != 0.0)
    }

    /// Whether no interior diff magnitude is `<=` both neighbours
    #[must_use]
    pub fn is_folded(&self) -> bool {
        self.entries
            .get(1..)
            .unwrap_or_default()
            .windows(3)
            .all(|w| {
                let (a, b, c) = (w[0].magnitude(), w[1].magnitude(), w[2].magnitude());
                !(b <= a && b <= c)
            })
    }

    /// Overwrite every non-anchor diff, in order
    ///
    /// Pairs with [`crate::transition_diffs`] when transitions are re-evaluated
    /// in shards. The anchor keeps its `0.0`.
    ///
    /// # Errors
    /// Returns [`Error::DiffCountMismatch`] unless exactly `len() - 1` diffs are
    /// given (or none for an empty skeleton).
    pub fn replace_diffs(&mut self, diffs: &[f64]) -> Result<(), Error> {
        let expected = self.entries.len().saturating_sub(1);
        if diffs.len() != expected {
            return Err(Error::DiffCountMismatch {
                expected,
                actual: diffs.len(),
            });
        }
        for (entry, &diff) in self.entries.iter_mut().skip(1).zip(diffs) {
            entry.diff = diff;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Entry<D>> {
        &mut self.entries
    }
}

impl<D> Default for Skeleton<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores a skeleton from entries kept by the host. The entries are taken
/// as-is; nothing is re-folded.
impl<D> FromIterator<Entry<D>> for Skeleton<D> {
    fn from_iter<I: IntoIterator<Item = Entry<D>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, D> IntoIterator for &'a Skeleton<D> {
    type Item = &'a Entry<D>;
    type IntoIter = std::slice::Iter<'a, Entry<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<D> IntoIterator for Skeleton<D> {
    type Item = Entry<D>;
    type IntoIter = std::vec::IntoIter<Entry<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
