//! Archive of extremum pairs folded out of the skeleton.

use serde::{Deserialize, Serialize};

/// A locally insignificant extremum pair removed from the skeleton
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldedPair<D> {
    /// Earlier extremum of the pair
    pub first: D,
    /// Later extremum of the pair
    pub second: D,
    /// `|distance(first, second)|` as of the last (re)computation
    pub importance: f64,
}

impl<D> FoldedPair<D> {
    #[inline]
    pub const fn new(first: D, second: D, importance: f64) -> Self {
        Self {
            first,
            second,
            importance,
        }
    }
}

/// Folded pairs in the order they were folded
///
/// Fold order is not series order: a pair folded late may lie earlier in the
/// series than one folded before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Archive<D> {
    pairs: Vec<FoldedPair<D>>,
}

impl<D> Archive<D> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn push(&mut self, pair: FoldedPair<D>) {
        self.pairs.push(pair);
    }

    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[FoldedPair<D>] {
        &self.pairs
    }

    /// Mutable view for in-place (possibly sharded) re-evaluation
    #[inline]
    pub fn pairs_mut(&mut self) -> &mut [FoldedPair<D>] {
        &mut self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoldedPair<D>> {
        self.pairs.iter()
    }

    /// Append every pair of `other`, keeping both fold orders
    pub fn append(&mut self, other: &mut Self) {
        self.pairs.append(&mut other.pairs);
    }

    /// Pairs whose importance reaches `deviation`
    pub fn at_least(&self, deviation: f64) -> impl Iterator<Item = &FoldedPair<D>> + '_ {
        self.pairs.iter().filter(move |p| p.importance >= deviation)
    }
}

impl<D> Default for Archive<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Extend<FoldedPair<D>> for Archive<D> {
    fn extend<I: IntoIterator<Item = FoldedPair<D>>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl<D> FromIterator<FoldedPair<D>> for Archive<D> {
    fn from_iter<I: IntoIterator<Item = FoldedPair<D>>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a, D> IntoIterator for &'a Archive<D> {
    type Item = &'a FoldedPair<D>;
    type IntoIter = std::slice::Iter<'a, FoldedPair<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl<D> IntoIterator for Archive<D> {
    type Item = FoldedPair<D>;
    type IntoIter = std::vec::IntoIter<FoldedPair<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
