//! Reads numbers from a file, one per line, and prints those lying within 5 of the median of the last 10

use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use median_band::{LineSink, LineSource, SourceError, StreamProcessor};

fn open_failure_message(e: &SourceError) -> &'static str {
    match e {
        SourceError::NotFound(_) => "File does not exist!",
        SourceError::Open { .. } => "Unable to open file!",
    }
}

fn main() -> ExitCode {
    let Some(path) = env::args_os().nth(1) else {
        eprintln!("You need to enter a filename to read in.");
        return ExitCode::FAILURE;
    };

    let mut source = match LineSource::open(&path) {
        Ok(source) => source,
        Err(e) => {
            #[cfg(feature = "log")]
            log::debug!("{e}");

            eprintln!("{}", open_failure_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let mut sink = LineSink::new(BufWriter::new(io::stdout().lock()));
    let mut processor = StreamProcessor::new();

    let result = processor
        .run(source.by_ref(), &mut sink)
        .and_then(|_summary| sink.flush());

    #[cfg(feature = "log")]
    log::debug!("Skipped {} lines without a number", source.skipped());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed early, e.g. piped into `head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Unable to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
