//! Re-evaluation of magnitudes under a different distance function.
//!
//! Structure never changes here: the same points stay in the skeleton, the
//! same pairs stay in the archive, in the same order. Every archive importance
//! and every skeleton transition depends only on its own two endpoints, so both
//! lists can be split into contiguous shards, re-evaluated independently and
//! written back in order with the same result as one sequential pass.

use crate::archive::{Archive, FoldedPair};
use crate::distance::Distance;
use crate::skeleton::{Entry, Skeleton};

/// Recompute every magnitude under `distance`
///
/// Pass `None` for the skeleton when only archive importances are needed.
pub fn recompress<D, F>(distance: &F, skeleton: Option<&mut Skeleton<D>>, archive: &mut Archive<D>)
where
    F: Distance<D> + ?Sized,
{
    recompress_archive(distance, archive);
    if let Some(skeleton) = skeleton {
        recompress_skeleton(distance, skeleton);
        log::debug!(
            "recompressed {} skeleton transitions and {} folded pairs",
            skeleton.len().saturating_sub(1),
            archive.len()
        );
    }
}

pub fn recompress_archive<D, F>(distance: &F, archive: &mut Archive<D>)
where
    F: Distance<D> + ?Sized,
{
    recompress_pairs(distance, archive.pairs_mut());
}

/// Recompute importances of any contiguous shard of an archive, in place
pub fn recompress_pairs<D, F>(distance: &F, pairs: &mut [FoldedPair<D>])
where
    F: Distance<D> + ?Sized,
{
    for pair in pairs {
        pair.importance = distance.distance(&pair.first, &pair.second).abs();
    }
}

/// Recompute every non-anchor diff of `skeleton` in place
pub fn recompress_skeleton<D, F>(distance: &F, skeleton: &mut Skeleton<D>)
where
    F: Distance<D> + ?Sized,
{
    let entries = skeleton.entries_mut();
    for i in 1..entries.len() {
        let diff = distance.distance(&entries[i - 1].point, &entries[i].point);
        entries[i].diff = diff;
    }
}

/// Diffs for the transitions into `window[1..]`
///
/// To shard a skeleton, hand each worker an overlapping window
/// `entries[start - 1..end]` (or `entries[..end]` for the first shard),
/// concatenate the results in shard order and write them back with
/// [`Skeleton::replace_diffs`].
#[must_use]
pub fn transition_diffs<D, F>(distance: &F, window: &[Entry<D>]) -> Vec<f64>
where
    F: Distance<D> + ?Sized,
{
    window
        .windows(2)
        .map(|w| distance.distance(&w[0].point, &w[1].point))
        .collect()
}
