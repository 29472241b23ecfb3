//! `zigzag-skeleton` - Turning-point compression for numeric time series
//!
//! Compresses an ordered numeric series into a sparse *skeleton* of locally
//! significant turning points, plus an *archive* of the turning points folded
//! away on the way. From those two, a zigzag indicator can be rebuilt at any
//! deviation without touching the raw series again.
//!
//! # Features
//! - **Online**: one forward pass, O(1) amortized work per point
//! - **Resumable**: hand the returned state back in to continue the same series
//! - **Metric-agnostic**: any signed distance function (absolute change,
//!   percentage change, log-return, ...); switch metrics later with
//!   [`recompress`] instead of recompressing raw data
//! - **Chunkable**: compress contiguous chunks separately and [`merge`] them
//!   pairwise in series order
//!
//! # Example
//! ```
//! use zigzag_skeleton::{compress, distance, select, Compressed, Sample};
//!
//! let values = [1.0, 4.0, 2.0, 4.0, 3.0, 7.0, 4.0, 7.0, 7.0, 9.0];
//! let series = values
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| Sample::new(i as u64 + 1, v));
//!
//! let state = compress(series, &distance::absolute, Compressed::new());
//!
//! // Everything ever seen, sorted by index
//! let all = select(&state.skeleton, &state.archive, 0.0, Sample::key);
//! assert_eq!(all.len(), state.skeleton.len() + 2 * state.archive.len());
//!
//! // Only swings of at least 3
//! let coarse = state.select(3.0, Sample::key);
//! assert!(coarse.len() < all.len());
//! ```
//!
//! # How it works
//!
//! ## Skeleton
//!
//! The skeleton is a list of `(point, diff)` entries where `diff` is the signed
//! distance from the previous entry (`0` for the first, the anchor). Diffs
//! alternate in sign, so every entry is a local extremum. A new point that
//! moves in the same direction as the last diff replaces the last entry; a
//! point that reverses direction is appended; a point at zero distance is
//! dropped.
//!
//! ## Folding
//!
//! After each change, while the skeleton has at least four entries, look at
//! the last three diff magnitudes `a, b, c`. If `b <= a` and `b <= c` the
//! extremum pair spanning `b` is insignificant: it goes to the archive with
//! importance `b`, is removed, and the last entry's diff is recomputed against
//! its new predecessor. Folds can cascade. As a result no interior magnitude
//! is ever `<=` both of its neighbours, and the magnitudes rise to a peak and
//! then fall.
//!
//! ## Indicator
//!
//! [`select`] scans the skeleton for the vertices bounding moves of at least
//! the requested deviation, recalls archived pairs whose importance reaches it,
//! and sorts the union by a caller-provided order key.
//!
//! ## Sharding
//!
//! [`recompress`] is a map over independent endpoint pairs, so archives and
//! skeleton transitions can be re-evaluated in contiguous shards (see
//! [`recompress_pairs`] and [`transition_diffs`]). Skeleton *building* is
//! sequential: chunks built separately must be merged with their direct
//! successor, which [`merge`] enforces.

mod archive;
mod compress;
pub mod distance;
mod error;
mod merge;
mod point;
mod recompress;
mod select;
mod skeleton;


// Re-export public API
pub use archive::{Archive, FoldedPair};
pub use compress::{compress, Compressed, Compressor};
pub use distance::Distance;
pub use error::Error;
pub use merge::{merge, merge_all, Chunk};
pub use point::Sample;
pub use recompress::{recompress, recompress_archive, recompress_pairs, recompress_skeleton, transition_diffs};
pub use select::{importance_levels, refine, select, select_from_skeleton, IndicatorPoint};
pub use skeleton::{Entry, Skeleton};
