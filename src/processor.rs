//! Per-observation pipeline: window, median, band check, emission

use crate::band::BandFilter;
use crate::median::MedianEstimator;
use crate::sink::Sink;
use crate::window::SlidingWindow;

/// Lifecycle of a [`StreamProcessor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    /// Still consuming observations
    Running,
    /// The source has been exhausted; no further observations are taken
    Done,
}

/// Outcome of processing a single observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// The observation that was processed
    pub observation: f64,
    /// Median of the window right after the observation was pushed
    pub median: f64,
    /// Whether the observation fell within the band and should be forwarded
    pub emit: bool,
}

/// Counts for one completed run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Observations pulled from the source
    pub observed: u64,
    /// Observations forwarded to the sink
    pub emitted: u64,
}

/// Filters a stream of observations against the median of its most recent values
///
/// Each observation is pushed into a [`SlidingWindow`], the window median is taken with a
/// [`MedianEstimator`], and the observation is forwarded if the [`BandFilter`] accepts it.
/// Decisions are final as soon as they are made, and forwarded values keep their arrival order.
///
/// A processor serves exactly one stream.
/// Use [`Self::run`] to drain a source into a sink, or [`Self::observe`] to drive it by hand.
#[derive(Debug, Clone)]
pub struct StreamProcessor {
    window: SlidingWindow,
    estimator: MedianEstimator,
    filter: BandFilter,
    state: ProcessorState,
}

impl Default for StreamProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamProcessor {
    /// Constructs a processor with an empty window, ready to consume observations
    pub fn new() -> Self {
        Self {
            window: SlidingWindow::new(),
            estimator: MedianEstimator::new(),
            filter: BandFilter::new(),
            state: ProcessorState::Running,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProcessorState {
        self.state
    }

    /// The window as it stands after the last observation
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    /// Processes one observation and reports whether it should be forwarded
    ///
    /// Returns `None` once the processor is [`ProcessorState::Done`].
    /// It would also return `None` if the window had no median, which cannot happen here since the
    /// observation is pushed before the median is taken.
    pub fn observe(&mut self, observation: f64) -> Option<Verdict> {
        if self.state == ProcessorState::Done {
            return None;
        }

        self.window.push(observation);
        let median = self.estimator.median_of(self.window.snapshot())?;
        let emit = self.filter.accepts(observation, median);

        Some(Verdict {
            observation,
            median,
            emit,
        })
    }

    /// Pulls every observation from `source`, forwarding accepted ones to `sink`
    ///
    /// The processor is [`ProcessorState::Done`] once the source is exhausted.
    /// A sink error stops the run early and is returned as is.
    /// Running a processor that is already done pulls nothing and returns an empty summary.
    pub fn run<I, S>(&mut self, source: I, sink: &mut S) -> Result<RunSummary, S::Error>
    where
        I: IntoIterator<Item = f64>,
        S: Sink + ?Sized,
    {
        let mut summary = RunSummary::default();

        if self.state == ProcessorState::Done {
            #[cfg(feature = "log")]
            log::warn!("Stream processor already finished a stream; ignoring new source");

            #[cfg(not(feature = "log"))]
            eprintln!("Stream processor already finished a stream; ignoring new source");

            return Ok(summary);
        }

        for observation in source {
            let Some(verdict) = self.observe(observation) else {
                break;
            };
            summary.observed += 1;

            if verdict.emit {
                sink.emit(observation)?;
                summary.emitted += 1;
            } else {
                #[cfg(feature = "log")]
                log::trace!(
                    "Rejected {} (window median {})",
                    verdict.observation,
                    verdict.median
                );
            }
        }

        self.state = ProcessorState::Done;

        #[cfg(feature = "log")]
        log::debug!(
            "Stream finished: {} observed, {} emitted",
            summary.observed,
            summary.emitted
        );

        Ok(summary)
    }
}
