//! Sample struct for indexed numeric series.

use serde::{Deserialize, Serialize};

/// An indexed observation of a numeric series
///
/// The compression core never looks inside a datapoint; `Sample` is simply the
/// shape most callers need, and the built-in metrics in [`crate::distance`]
/// are written against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position in the series (sequence number, timestamp, transaction id, ...)
    pub index: u64,
    /// Observed value
    pub value: f64,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }

    /// Order key for [`crate::select`]
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.index
    }
}

impl From<(u64, f64)> for Sample {
    fn from((index, value): (u64, f64)) -> Self {
        Self { index, value }
    }
}
