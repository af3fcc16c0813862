//! Tolerance band around the window median

/// Distance from the median, on either side, within which an observation is accepted
pub const BAND_HALF_WIDTH: f64 = 5.0;

/// Accepts observations lying within [`BAND_HALF_WIDTH`] of a median
#[derive(Debug, Default, Clone, Copy)]
pub struct BandFilter;

impl BandFilter {
    /// Constructs a new [`Self`]
    pub fn new() -> Self {
        Self
    }

    /// Whether `observation` lies in `[median - 5.0, median + 5.0]`, bounds included
    pub fn accepts(&self, observation: f64, median: f64) -> bool {
        observation >= median - BAND_HALF_WIDTH && observation <= median + BAND_HALF_WIDTH
    }
}
