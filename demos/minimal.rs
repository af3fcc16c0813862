//! A basic example showing minimal usage
//!
//! We construct a [`StreamProcessor`], feed it a stream, and collect the values it lets through

use median_band::StreamProcessor;

/// Some sample readings to filter
///
/// In practice, this will probably be a much larger stream
/// Note that 88.0 and -40.0 are far from their neighbours and get dropped
const DATA: [f64; 15] = [
    21.4, 21.9, 22.3, 88.0, 21.7, 22.8, 23.1, 22.0, -40.0, 22.6, 23.4, 22.9, 24.0, 23.3, 23.8,
];

fn main() {
    let mut processor = StreamProcessor::new();

    // Any iterator of numbers works as a source, and a `Vec<f64>` works as a sink
    let mut accepted: Vec<f64> = Vec::new();
    let summary = match processor.run(DATA, &mut accepted) {
        Ok(summary) => summary,
        Err(never) => match never {},
    };

    println!("Kept {} of {} readings: {accepted:?}", summary.emitted, summary.observed);
}
