//! Output sinks for extracted regions.
//!
//! Regions are written as two-line FASTA blocks, `>Read_<ordinal>` followed
//! by the unwrapped sequence.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::core::region::ExtractedRegion;
use crate::parsing::{is_gzipped, is_stdin};

/// Destination for accepted regions
pub trait RegionSink {
    /// Write one region immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_region(&mut self, region: &ExtractedRegion) -> io::Result<()>;

    /// Flush buffered output
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes regions as unwrapped FASTA
pub struct FastaRegionWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastaRegionWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RegionSink for FastaRegionWriter<W> {
    fn write_region(&mut self, region: &ExtractedRegion) -> io::Result<()> {
        writeln!(self.inner, ">{}", region.header())?;
        self.inner.write_all(&region.sequence)?;
        self.inner.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Collects regions in memory
impl RegionSink for Vec<ExtractedRegion> {
    fn write_region(&mut self, region: &ExtractedRegion) -> io::Result<()> {
        self.push(region.clone());
        Ok(())
    }
}

/// Output destination for region FASTA.
///
/// Dropping an output discards write errors, so callers must end with
/// [`RegionOutput::finish`]. For gzip that is also where the trailer is written.
pub enum RegionOutput {
    Stdout(BufWriter<io::Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl RegionOutput {
    /// Flush all buffered data and finalize the compressed stream.
    ///
    /// # Errors
    ///
    /// Returns an error if any remaining data or the gzip trailer cannot be
    /// written.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut writer) => writer.flush(),
            Self::Plain(writer) => {
                writer.into_inner().map_err(io::IntoInnerError::into_error)?;
                Ok(())
            }
            Self::Gzip(encoder) => {
                let writer = encoder.finish()?;
                writer.into_inner().map_err(io::IntoInnerError::into_error)?;
                Ok(())
            }
        }
    }
}

impl Write for RegionOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::Plain(writer) => writer.write(buf),
            Self::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::Plain(writer) => writer.flush(),
            Self::Gzip(encoder) => encoder.flush(),
        }
    }
}

/// Open the output destination.
///
/// `None` or `-` writes to stdout; a `.gz`/`.bgz` path is gzip-compressed.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn create_output(path: Option<&Path>) -> io::Result<RegionOutput> {
    match path {
        None => Ok(RegionOutput::Stdout(BufWriter::new(io::stdout()))),
        Some(path) if is_stdin(path) => Ok(RegionOutput::Stdout(BufWriter::new(io::stdout()))),
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            if is_gzipped(path) {
                Ok(RegionOutput::Gzip(GzEncoder::new(file, Compression::default())))
            } else {
                Ok(RegionOutput::Plain(file))
            }
        }
    }
}
