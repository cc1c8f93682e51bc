use thiserror::Error;
use tracing::info;

use crate::core::read::Read;
use crate::extraction::engine::ExtractionEngine;
use crate::extraction::sink::RegionSink;
use crate::extraction::stats::ExtractionStats;
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read input: {0}")]
    Read(#[from] ParseError),

    #[error("Failed to write region: {0}")]
    Write(#[from] std::io::Error),
}

/// Drives an [`ExtractionEngine`] over a read stream and writes every
/// accepted region to a sink as soon as it is produced.
///
/// The extractor owns the sink and the ordinal counter. Running it over
/// several read streams continues the numbering where the last run stopped.
pub struct Extractor<'a, S: RegionSink> {
    engine: ExtractionEngine<'a>,
    sink: S,
    next_ordinal: u64,
    stats: ExtractionStats,
}

impl<'a, S: RegionSink> Extractor<'a, S> {
    pub fn new(engine: ExtractionEngine<'a>, sink: S) -> Self {
        let stats = ExtractionStats::new(engine.catalog().len());
        Self {
            engine,
            sink,
            next_ordinal: 0,
            stats,
        }
    }

    /// Start numbering regions from `ordinal` instead of 0
    #[must_use]
    pub fn starting_at(mut self, ordinal: u64) -> Self {
        self.next_ordinal = ordinal;
        self
    }

    pub fn engine(&self) -> &ExtractionEngine<'a> {
        &self.engine
    }

    /// Reads processed over all runs so far
    pub fn reads_processed(&self) -> u64 {
        self.stats.reads_processed
    }

    /// Ordinal the next written region will carry
    pub fn next_ordinal(&self) -> u64 {
        self.next_ordinal
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Extract regions from every read and write them to the sink.
    ///
    /// Stops at the first read or write error. Regions written before the
    /// error stay written and their ordinals stay used.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Read` if the read stream fails, or
    /// `ExtractError::Write` if the sink fails.
    pub fn run<I>(&mut self, reads: I) -> Result<&ExtractionStats, ExtractError>
    where
        I: IntoIterator<Item = Result<Read, ParseError>>,
    {
        let mut regions = self.engine.regions_from(reads, self.next_ordinal);

        let result = loop {
            match regions.next() {
                Some(Ok(region)) => {
                    if let Err(e) = self.sink.write_region(&region) {
                        break Err(ExtractError::Write(e));
                    }
                }
                Some(Err(e)) => break Err(ExtractError::Read(e)),
                None => break Ok(()),
            }
        };

        self.next_ordinal = regions.next_ordinal();
        let run_stats = regions.into_stats();
        self.stats.merge(&run_stats);

        result?;
        self.sink.flush()?;

        info!(
            "Processed {} reads, extracted {} regions ({} forward, {} reverse, {} rejected by length)",
            run_stats.reads_processed,
            run_stats.regions_emitted,
            run_stats.forward_regions,
            run_stats.reverse_regions,
            run_stats.rejected_by_length,
        );

        Ok(&self.stats)
    }

    /// Flush the sink and hand it back with the accumulated statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(mut self) -> Result<(S, ExtractionStats), ExtractError> {
        self.sink.flush()?;
        Ok((self.sink, self.stats))
    }
}
