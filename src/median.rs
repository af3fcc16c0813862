//! Exact median of a small set of observations

use std::cmp::Ordering;

use crate::window::WindowSnapshot;

/// Computes the median of the window contents handed to it
///
/// Stateless: every call works on its own copy of the snapshot,
/// so the window the snapshot was taken from is never reordered.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianEstimator;

impl MedianEstimator {
    /// Constructs a new [`Self`]
    pub fn new() -> Self {
        Self
    }

    /// Median of the snapshot's values
    ///
    /// Returns `None` for an empty snapshot.
    pub fn median_of(&self, mut snapshot: WindowSnapshot) -> Option<f64> {
        median(snapshot.as_mut_slice())
    }
}

/// Median of `values`, partially reordering the slice in place
///
/// For an odd count this is the middle value of the ascending order.
/// For an even count it is the mean of the two middle values.
/// Duplicates count once per occurrence.
///
/// Returns `None` if `values` is empty.
pub fn median(values: &mut [f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    let (lower, upper, _) = values.select_nth_unstable_by(mid, compare);
    let upper = *upper;

    if n % 2 == 1 {
        return Some(upper);
    }

    // Only rank `mid` is exact after one selection. Everything left of it is <= it but unordered,
    // so rank `mid - 1` is selected again within that partition.
    let (_, lower, _) = lower.select_nth_unstable_by(mid - 1, compare);
    Some((*lower + upper) / 2.)
}

fn compare(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
