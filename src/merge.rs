//! Combining skeletons built independently for consecutive chunks of a series.
//!
//! A long series can be cut into chronologically contiguous chunks and each
//! chunk compressed on its own, from empty state. The results are not
//! independent though: two chunks combine only when they are neighbours, by
//! feeding the later chunk's skeleton points through [`compress`] on top of
//! the earlier chunk's state. Every chunk carries the ordinals it covers so
//! that merging anything else fails instead of producing a corrupted skeleton.
//!
//! Scheduling is up to the caller; any reduction order works as long as each
//! step merges a chunk with its immediate successor.

use serde::{Deserialize, Serialize};

use crate::compress::{compress, Compressed};
use crate::distance::Distance;
use crate::error::Error;

/// Compressed state of the chunks `first..=last` of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk<D> {
    pub first: u64,
    pub last: u64,
    pub state: Compressed<D>,
}

impl<D> Chunk<D> {
    /// Compress one chunk from empty state
    ///
    /// `ordinal` is the chunk's position in the series; consecutive chunks must
    /// have consecutive ordinals.
    pub fn build<I, F>(ordinal: u64, points: I, distance: &F) -> Self
    where
        I: IntoIterator<Item = D>,
        F: Distance<D> + ?Sized,
    {
        Self {
            first: ordinal,
            last: ordinal,
            state: compress(points, distance, Compressed::new()),
        }
    }

    /// Whether `next` starts right after this chunk ends
    #[inline]
    #[must_use]
    pub fn precedes(&self, next: &Self) -> bool {
        self.last.checked_add(1) == Some(next.first)
    }

    #[must_use]
    pub fn into_state(self) -> Compressed<D> {
        self.state
    }
}

/// Merge `right` into `left`, where `right` immediately follows `left`
///
/// # Errors
/// Returns [`Error::NotAdjacent`] unless `left.last + 1 == right.first`.
pub fn merge<D, F>(left: Chunk<D>, right: Chunk<D>, distance: &F) -> Result<Chunk<D>, Error>
where
    F: Distance<D> + ?Sized,
{
    if !left.precedes(&right) {
        return Err(Error::NotAdjacent {
            left_last: left.last,
            right_first: right.first,
        });
    }

    let (skeleton, mut archive) = right.state.into_parts();
    let mut state = left.state;
    state.archive.append(&mut archive);

    log::trace!(
        "merging chunks {}..={} with {}..={}: feeding {} skeleton points",
        left.first,
        left.last,
        right.first,
        right.last,
        skeleton.len()
    );
    let state = compress(skeleton.into_iter().map(|e| e.point), distance, state);

    Ok(Chunk {
        first: left.first,
        last: right.last,
        state,
    })
}

/// Merge chunks given in series order into one
///
/// # Errors
/// Returns [`Error::NoChunks`] for empty input and [`Error::NotAdjacent`] at
/// the first chunk that does not directly follow its predecessor.
pub fn merge_all<D, F, I>(chunks: I, distance: &F) -> Result<Chunk<D>, Error>
where
    I: IntoIterator<Item = Chunk<D>>,
    F: Distance<D> + ?Sized,
{
    let mut chunks = chunks.into_iter();
    let first = chunks.next().ok_or(Error::NoChunks)?;
    let merged = chunks.try_fold(first, |acc, next| merge(acc, next, distance))?;
    log::debug!(
        "merged chunks {}..={}: skeleton {} points, archive {} pairs",
        merged.first,
        merged.last,
        merged.state.skeleton.len(),
        merged.state.archive.len()
    );
    Ok(merged)
}
