use serde::Serialize;

use crate::core::region::Strand;

/// Running counters for an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Reads pulled from the input
    pub reads_processed: u64,
    /// Reads that produced at least one region
    pub reads_with_regions: u64,
    /// Regions assigned an ordinal
    pub regions_emitted: u64,
    /// Emitted regions found on the forward strand
    pub forward_regions: u64,
    /// Emitted regions found on the reverse strand
    pub reverse_regions: u64,
    /// Candidates with both flanks present that failed the length gate
    pub rejected_by_length: u64,
    /// Emitted regions per catalog pair, indexed like the catalog
    pub regions_per_pair: Vec<u64>,
}

impl ExtractionStats {
    pub fn new(pair_count: usize) -> Self {
        Self {
            regions_per_pair: vec![0; pair_count],
            ..Self::default()
        }
    }

    pub(crate) fn record_emission(&mut self, pair_index: usize, strand: Strand) {
        self.regions_emitted += 1;
        match strand {
            Strand::Forward => self.forward_regions += 1,
            Strand::Reverse => self.reverse_regions += 1,
        }
        if let Some(count) = self.regions_per_pair.get_mut(pair_index) {
            *count += 1;
        }
    }

    /// Fraction of processed reads that yielded a region
    #[must_use]
    pub fn yield_fraction(&self) -> f64 {
        if self.reads_processed == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.reads_with_regions as f64 / self.reads_processed as f64
        }
    }

    /// Add another run's counters into this one
    pub fn merge(&mut self, other: &Self) {
        self.reads_processed += other.reads_processed;
        self.reads_with_regions += other.reads_with_regions;
        self.regions_emitted += other.regions_emitted;
        self.forward_regions += other.forward_regions;
        self.reverse_regions += other.reverse_regions;
        self.rejected_by_length += other.rejected_by_length;

        if self.regions_per_pair.len() < other.regions_per_pair.len() {
            self.regions_per_pair.resize(other.regions_per_pair.len(), 0);
        }
        for (total, count) in self
            .regions_per_pair
            .iter_mut()
            .zip(&other.regions_per_pair)
        {
            *total += count;
        }
    }
}
