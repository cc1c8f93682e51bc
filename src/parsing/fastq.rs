//! Streaming FASTQ reader yielding [`Read`]s.
//!
//! Records are pulled one at a time so that memory use does not grow with
//! the size of the input. Quality strings are discarded.

use std::io::BufRead;
use std::path::Path;

use noodles::fastq;

use crate::core::read::Read;
use crate::parsing::{open_input, ParseError};

/// Lazy iterator over the reads of a FASTQ source
pub struct FastqReads<R: BufRead> {
    reader: fastq::io::Reader<R>,
    record: fastq::Record,
}

impl FastqReads<Box<dyn BufRead>> {
    /// Open a FASTQ file (plain, gzipped, or `-` for stdin)
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: BufRead> FastqReads<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: fastq::io::Reader::new(inner),
            record: fastq::Record::default(),
        }
    }
}

impl<R: BufRead> Iterator for FastqReads<R> {
    type Item = Result<Read, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(0) => None,
            Ok(_) => Some(Ok(Read::new(
                String::from_utf8_lossy(self.record.name()).to_string(),
                self.record.sequence().to_vec(),
            ))),
            Err(e) => Some(Err(ParseError::Noodles(format!(
                "Failed to parse FASTQ record: {e}"
            )))),
        }
    }
}
