//! Readers for the two input formats.
//!
//! - **Flank pairs**: FASTA, consumed in full up front ([`fasta`])
//! - **Reads**: FASTQ, streamed one record at a time ([`fastq`])
//!
//! Both accept plain or gzip/bgzip compressed files. Compression is detected
//! from the file extension (`.gz`, `.bgz`). A path of `-` reads plain text
//! from stdin.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flank_extract::parsing::{fasta, fastq};
//! use std::path::Path;
//!
//! let flanks = fasta::read_flank_records(Path::new("flanks.fa")).unwrap();
//! for read in fastq::FastqReads::open(Path::new("reads.fastq.gz")).unwrap() {
//!     let read = read.unwrap();
//!     println!("{} {}", read.name, read.len());
//! }
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod fasta;
pub mod fastq;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Path that stands for stdin
pub const STDIN_PATH: &str = "-";

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Check if the path refers to stdin
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Open a path for buffered reading, decompressing gzip/bgzip by extension.
///
/// `MultiGzDecoder` is used so that multi-member files (bgzip, concatenated
/// gzip) are read to the end rather than stopping after the first member.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if is_stdin(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
