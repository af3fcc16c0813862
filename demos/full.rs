//! A more fully-fledged example, driving a [`StreamProcessor`] one observation at a time
//!
//! Reads lines from a fixed text blob through a [`LineSource`], so malformed lines are skipped,
//! and prints the window median next to every decision

use std::io::Cursor;

use median_band::{LineSink, LineSource, ProcessorState, StreamProcessor};

/// Raw input, as it might come from a sensor log
const INPUT: &str = "\
10.0
10.4
not a reading
9.8
31.2
10.1
10.6 (recalibrated)
9.9
-2.0
10.3
";

fn main() -> std::io::Result<()> {
    let mut source = LineSource::new(Cursor::new(INPUT));
    let mut processor = StreamProcessor::new();

    // Step through by hand, so we can look at each verdict
    for observation in source.by_ref() {
        let Some(verdict) = processor.observe(observation) else {
            break;
        };

        let decision = if verdict.emit { "kept" } else { "dropped" };
        println!(
            "{:>6} | median {:>6.2} | window size {:>2} | {decision}",
            verdict.observation,
            verdict.median,
            processor.window().len(),
        );
    }
    println!("Skipped {} malformed lines", source.skipped());

    // A fresh processor for a fresh stream, this time written straight out as lines
    let mut processor = StreamProcessor::new();
    let mut sink = LineSink::new(std::io::stdout().lock());
    processor.run(LineSource::new(Cursor::new(INPUT)), &mut sink)?;
    sink.flush()?;

    assert_eq!(processor.state(), ProcessorState::Done);
    Ok(())
}
