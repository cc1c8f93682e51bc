use std::collections::VecDeque;

use tracing::info;

use crate::core::read::Read;
use crate::core::region::ExtractedRegion;
use crate::extraction::engine::{ExtractionEngine, RegionHit};
use crate::extraction::stats::ExtractionStats;

/// Lazy stream of extracted regions over a read stream.
///
/// Reads are pulled one at a time and fully evaluated against the catalog
/// before the next is pulled. Ordinals are assigned as regions are yielded,
/// so they are contiguous across the whole stream. The first read error ends
/// the stream.
pub struct Regions<'e, I> {
    engine: &'e ExtractionEngine<'e>,
    reads: I,
    pending: VecDeque<(String, RegionHit)>,
    next_ordinal: u64,
    stats: ExtractionStats,
    finished: bool,
}

impl<'e, I> Regions<'e, I> {
    pub(crate) fn new(engine: &'e ExtractionEngine<'e>, reads: I, first_ordinal: u64) -> Self {
        Self {
            engine,
            reads,
            pending: VecDeque::new(),
            next_ordinal: first_ordinal,
            stats: ExtractionStats::new(engine.catalog().len()),
            finished: false,
        }
    }

    /// Number of reads pulled so far
    pub fn reads_processed(&self) -> u64 {
        self.stats.reads_processed
    }

    /// Ordinal the next yielded region will carry
    pub fn next_ordinal(&self) -> u64 {
        self.next_ordinal
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn into_stats(self) -> ExtractionStats {
        self.stats
    }

    fn process(&mut self, read: Read) {
        let scan = self.engine.scan(&read);

        self.stats.reads_processed += 1;
        self.stats.rejected_by_length += scan.rejected as u64;
        if !scan.hits.is_empty() {
            self.stats.reads_with_regions += 1;
        }

        let interval = self.engine.config().progress_interval;
        if interval > 0 && self.stats.reads_processed % interval == 0 {
            info!(
                "Processed {} reads, {} regions extracted",
                self.stats.reads_processed,
                self.stats.regions_emitted + scan.hits.len() as u64
            );
        }

        self.pending
            .extend(scan.hits.into_iter().map(|hit| (read.name.clone(), hit)));
    }

    fn emit(&mut self, read_name: String, hit: RegionHit) -> ExtractedRegion {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.stats.record_emission(hit.pair_index, hit.strand);

        ExtractedRegion {
            ordinal,
            sequence: hit.sequence,
            read_name,
            pair_index: hit.pair_index,
            strand: hit.strand,
        }
    }
}

impl<'e, I, E> Iterator for Regions<'e, I>
where
    I: Iterator<Item = Result<Read, E>>,
{
    type Item = Result<ExtractedRegion, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((read_name, hit)) = self.pending.pop_front() {
                return Some(Ok(self.emit(read_name, hit)));
            }
            if self.finished {
                return None;
            }
            match self.reads.next() {
                Some(Ok(read)) => self.process(read),
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}
