#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod band;
pub mod median;
pub mod processor;
pub mod sink;
pub mod source;
pub mod window;

pub use band::{BandFilter, BAND_HALF_WIDTH};
pub use median::{median, MedianEstimator};
pub use processor::{ProcessorState, RunSummary, StreamProcessor, Verdict};
pub use sink::{LineSink, Sink};
pub use source::{parse_leading_number, LineSource, SourceError};
pub use window::{SlidingWindow, WindowSnapshot, WINDOW_CAPACITY};
