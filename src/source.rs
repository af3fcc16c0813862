//! Line-oriented source of observations
//!
//! Each line contributes at most one observation: the number it starts with.
//! Lines without one are skipped without complaint, so the processor only ever sees valid numbers.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to set up a [`LineSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the given path
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but could not be opened for reading
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Parses the leading number of a line
///
/// Leading whitespace is skipped, then the longest run shaped like a decimal float is taken:
/// optional sign, digits with at most one decimal point, then an optional exponent.
/// Whatever follows that run is ignored, so `"5.25kg"` gives `5.25`.
///
/// Returns `None` when the run has no mantissa digits, when an exponent marker is not followed by
/// digits (`"3e"`, `"1e+"`), or when the number is not finite.
pub fn parse_leading_number(line: &str) -> Option<f64> {
    let text = line.trim_start();
    let bytes = text.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut mantissa = digits(end);
    end += mantissa;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let fraction = digits(end);
        end += fraction;
        mantissa += fraction;
    }
    if mantissa == 0 {
        return None;
    }

    // Once an exponent marker is read the run must finish as an exponent
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exponent = digits(end);
        if exponent == 0 {
            return None;
        }
        end += exponent;
    }

    let value: f64 = text[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

/// Observations read line by line from `R`
///
/// Ends at end of input, or at the first read error.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line: String,
    skipped: u64,
    finished: bool,
}

impl LineSource<BufReader<File>> {
    /// Opens the file at `path` as a source
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wraps an already open reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            skipped: 0,
            finished: false,
        }
    }

    /// Number of lines discarded so far for not holding a number
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.finished = true,
                Ok(_) => {
                    if let Some(value) = parse_leading_number(&self.line) {
                        return Some(value);
                    }

                    self.skipped += 1;
                    #[cfg(feature = "log")]
                    log::debug!("Skipping line without a number: {:?}", self.line.trim_end());
                }
                Err(e) => {
                    #[cfg(feature = "log")]
                    log::warn!("Stopping at unreadable input: {e}");

                    #[cfg(not(feature = "log"))]
                    eprintln!("Stopping at unreadable input: {e}");

                    self.finished = true;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_leading_number("42"), Some(42.));
        assert_eq!(parse_leading_number("-3.5"), Some(-3.5));
        assert_eq!(parse_leading_number("+.5e1"), Some(5.));
        assert_eq!(parse_leading_number("1e-3\r\n"), Some(0.001));
    }

    #[test]
    fn leading_whitespace_and_trailing_words() {
        assert_eq!(parse_leading_number("   7.25"), Some(7.25));
        assert_eq!(parse_leading_number("\t4 trailing words"), Some(4.));
    }

    #[test]
    fn numeric_prefix() {
        assert_eq!(parse_leading_number("5.25kg"), Some(5.25));
        assert_eq!(parse_leading_number("12,5"), Some(12.));
        assert_eq!(parse_leading_number("1.5.2"), Some(1.5));
        assert_eq!(parse_leading_number("0x1A"), Some(0.));
        assert_eq!(parse_leading_number("7."), Some(7.));
    }

    #[test]
    fn unfinished_exponent() {
        assert_eq!(parse_leading_number("3e"), None);
        assert_eq!(parse_leading_number("1e+"), None);
        assert_eq!(parse_leading_number("2.5E-x"), None);
        assert_eq!(parse_leading_number("4e2e"), Some(400.));
    }

    #[test]
    fn unfinished_exponent_lines_are_skipped() {
        let mut source = LineSource::new(Cursor::new("10\n3e\n1e+\n11\n"));

        let values: Vec<f64> = source.by_ref().collect();

        assert_eq!(values, vec![10., 11.]);
        assert_eq!(source.skipped(), 2);
    }

    #[test]
    fn no_number() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("   "), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("x7"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("e5"), None);
        assert_eq!(parse_leading_number("µ"), None);
    }

    #[test]
    fn not_finite() {
        assert_eq!(parse_leading_number("nan"), None);
        assert_eq!(parse_leading_number("-inf"), None);
        assert_eq!(parse_leading_number("infinity"), None);
        assert_eq!(parse_leading_number("1e400"), None);
    }

    #[test]
    fn skips_malformed_lines() {
        let file = File::open("./test_data/mixed_tokens.txt").unwrap();
        let mut source = LineSource::new(BufReader::new(file));

        let values: Vec<f64> = source.by_ref().collect();

        assert_eq!(values, vec![1., 2., 3.5, 4., 5.25, 6., 7., 5., 8.]);
        assert_eq!(source.skipped(), 6);
    }

    #[test]
    fn last_line_without_newline() {
        let source = LineSource::new(Cursor::new("1\n2"));
        assert_eq!(source.collect::<Vec<_>>(), vec![1., 2.]);
    }

    #[test]
    fn stops_at_read_error() {
        struct Truncated(Cursor<&'static [u8]>);

        impl Read for Truncated {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                match self.0.read(buf)? {
                    0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated")),
                    n => Ok(n),
                }
            }
        }

        let mut source = LineSource::new(BufReader::new(Truncated(Cursor::new(&b"1\n2\n"[..]))));

        assert_eq!(source.next(), Some(1.));
        assert_eq!(source.next(), Some(2.));
        assert_eq!(source.next(), None);
        assert_eq!(source.next(), None);
    }

    #[test]
    fn open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = LineSource::open(&path).unwrap_err();

        assert!(matches!(err, SourceError::NotFound(p) if p == path));
    }

    #[test]
    fn open_directory() {
        let dir = tempfile::tempdir().unwrap();

        let result = LineSource::open(dir.path()).map(|source| source.count());

        // Opening a directory fails on some platforms and only fails on read on others
        match result {
            Err(SourceError::Open { path, .. }) => assert_eq!(path, dir.path()),
            Ok(count) => assert_eq!(count, 0),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn open_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10\nten\n11").unwrap();

        let source = LineSource::open(file.path()).unwrap();

        assert_eq!(source.collect::<Vec<_>>(), vec![10., 11.]);
    }
}
