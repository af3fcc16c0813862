//! Fixed-capacity retention buffer of the most recent observations

use std::collections::VecDeque;
use std::ops::Deref;

/// Number of observations the window retains
pub const WINDOW_CAPACITY: usize = 10;

/// The most recent observations of a stream, oldest first
///
/// Holds at most [`WINDOW_CAPACITY`] values.
/// Pushing into a full window evicts the oldest value before the new one is kept.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<f64>,
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingWindow {
    /// Constructs an empty window
    pub fn new() -> Self {
        Self {
            values: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Appends `value` as the newest observation, evicting the oldest one if the window is full
    pub fn push(&mut self, value: f64) {
        if self.values.len() == WINDOW_CAPACITY {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Copies the current contents out, in arrival order
    pub fn snapshot(&self) -> WindowSnapshot {
        let mut snapshot = WindowSnapshot {
            values: [0.; WINDOW_CAPACITY],
            len: self.values.len(),
        };
        for (slot, value) in snapshot.values.iter_mut().zip(self.values.iter()) {
            *slot = *value;
        }
        snapshot
    }

    /// Number of observations currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A point-in-time copy of a [`SlidingWindow`]
///
/// Lives on the stack, so taking one per observation does not allocate.
/// Dereferences to the held values in arrival order.
#[derive(Debug, Clone, Copy)]
pub struct WindowSnapshot {
    values: [f64; WINDOW_CAPACITY],
    len: usize,
}

impl WindowSnapshot {
    /// Builds a snapshot from up to [`WINDOW_CAPACITY`] values
    ///
    /// If more are given, only the last [`WINDOW_CAPACITY`] are kept, as the window would.
    pub fn from_slice(values: &[f64]) -> Self {
        let tail = &values[values.len().saturating_sub(WINDOW_CAPACITY)..];
        let mut snapshot = Self {
            values: [0.; WINDOW_CAPACITY],
            len: tail.len(),
        };
        snapshot.values[..tail.len()].copy_from_slice(tail);
        snapshot
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values[..self.len]
    }
}

impl Deref for WindowSnapshot {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values[..self.len]
    }
}

impl PartialEq for WindowSnapshot {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}
