use std::ops::Range;

use memchr::memmem::Finder;
use tracing::trace;

use crate::catalog::store::FlankCatalog;
use crate::core::read::Read;
use crate::core::region::Strand;
use crate::core::sequence::reverse_complement;
use crate::extraction::gate::LengthGate;
use crate::extraction::stream::Regions;

/// Default length tolerance around each pair's expected length
pub const DEFAULT_TOLERANCE: u64 = 20;

/// Default number of reads between progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Configuration for the extraction engine
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Symmetric, exclusive margin around the expected region length
    pub tolerance: u64,
    /// Log progress every this many reads (0 disables)
    pub progress_interval: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Outcome of searching one orientation of a read for one flank pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one of the two flanks does not occur
    NoMatch,
    /// Both flanks occur but the region between them failed the length gate.
    /// Out-of-order or overlapping flanks land here with length 0.
    Rejected { length: usize },
    /// Region accepted; the range indexes the searched sequence
    Accepted(Range<usize>),
}

/// A region accepted for one read, before it is assigned an ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHit {
    pub pair_index: usize,
    pub strand: Strand,
    pub sequence: Vec<u8>,
}

/// Everything the engine decided about a single read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadScan {
    /// Accepted regions in emission order: by pair, forward before reverse
    pub hits: Vec<RegionHit>,
    /// Candidates where both flanks were found but the gate said no
    pub rejected: usize,
}

/// Pre-built needles for one catalog pair
struct PairSearcher {
    left: Finder<'static>,
    right: Finder<'static>,
    expected_length: u64,
}

impl PairSearcher {
    fn locate(&self, haystack: &[u8], gate: &LengthGate) -> SearchOutcome {
        let (Some(left), Some(right)) = (self.left.find(haystack), self.right.find(haystack))
        else {
            return SearchOutcome::NoMatch;
        };

        let start = left + self.left.needle().len();
        let length = right.saturating_sub(start);
        if gate.accepts(self.expected_length, length as u64) {
            SearchOutcome::Accepted(start..right)
        } else {
            SearchOutcome::Rejected { length }
        }
    }
}

/// The region extraction engine.
///
/// Holds the catalog read-only; every read is searched against every pair in
/// both orientations. Ordinals and output are handled by [`Regions`] and
/// [`crate::extraction::extractor::Extractor`].
pub struct ExtractionEngine<'a> {
    catalog: &'a FlankCatalog,
    searchers: Vec<PairSearcher>,
    gate: LengthGate,
    config: ExtractionConfig,
}

impl<'a> ExtractionEngine<'a> {
    /// Create a new engine with default configuration
    pub fn new(catalog: &'a FlankCatalog) -> Self {
        Self::with_config(catalog, ExtractionConfig::default())
    }

    /// Create a new engine with custom configuration
    pub fn with_config(catalog: &'a FlankCatalog, config: ExtractionConfig) -> Self {
        let searchers = catalog
            .iter()
            .map(|pair| PairSearcher {
                left: Finder::new(pair.sequence_left.as_bytes()).into_owned(),
                right: Finder::new(pair.sequence_right.as_bytes()).into_owned(),
                expected_length: pair.expected_length,
            })
            .collect();

        Self {
            catalog,
            searchers,
            gate: LengthGate::new(config.tolerance),
            config,
        }
    }

    pub fn catalog(&self) -> &'a FlankCatalog {
        self.catalog
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn gate(&self) -> &LengthGate {
        &self.gate
    }

    /// Search one sequence (either orientation) for one catalog pair.
    ///
    /// # Panics
    ///
    /// Panics if `pair_index` is out of range for the catalog.
    pub fn search(&self, pair_index: usize, sequence: &[u8]) -> SearchOutcome {
        self.searchers[pair_index].locate(sequence, &self.gate)
    }

    /// Evaluate one read against every pair, forward and reverse
    pub fn scan(&self, read: &Read) -> ReadScan {
        let mut scan = ReadScan::default();
        if self.searchers.is_empty() {
            return scan;
        }

        let forward = read.sequence.as_slice();
        let reverse = reverse_complement(forward);

        for (pair_index, searcher) in self.searchers.iter().enumerate() {
            for (strand, sequence) in [(Strand::Forward, forward), (Strand::Reverse, &reverse[..])] {
                match searcher.locate(sequence, &self.gate) {
                    SearchOutcome::NoMatch => {}
                    SearchOutcome::Rejected { length } => {
                        trace!(
                            "{}: {strand} region of {length} bp rejected for {} (expected {})",
                            read.name,
                            self.catalog.pairs()[pair_index].label(),
                            searcher.expected_length
                        );
                        scan.rejected += 1;
                    }
                    SearchOutcome::Accepted(range) => scan.hits.push(RegionHit {
                        pair_index,
                        strand,
                        sequence: sequence[range].to_vec(),
                    }),
                }
            }
        }

        scan
    }

    /// Lazily extract regions from a read stream, numbering them from 0
    pub fn regions<I, E>(&self, reads: I) -> Regions<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Result<Read, E>>,
    {
        self.regions_from(reads, 0)
    }

    /// Lazily extract regions, numbering them from `first_ordinal`
    pub fn regions_from<I, E>(&self, reads: I, first_ordinal: u64) -> Regions<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Result<Read, E>>,
    {
        Regions::new(self, reads.into_iter(), first_ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flank::FlankPair;

    fn pair(left: &str, right: &str, expected_length: u64) -> FlankPair {
        FlankPair {
            name_left: format!("{left}_L"),
            name_right: format!("{right}_R"),
            sequence_left: left.to_string(),
            sequence_right: right.to_string(),
            expected_length,
        }
    }

    fn read(sequence: &[u8]) -> Read {
        Read::new("read", sequence)
    }

    const LEFT: &str = "ACCGGA";
    const RIGHT: &str = "TTCAGC";

    fn amplicon(insert_len: usize) -> Vec<u8> {
        let mut seq = b"CC".to_vec();
        seq.extend_from_slice(LEFT.as_bytes());
        seq.extend(std::iter::repeat(b'G').take(insert_len));
        seq.extend_from_slice(RIGHT.as_bytes());
        seq.extend_from_slice(b"AA");
        seq
    }

    #[test]
    fn test_forward_region() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let seq = amplicon(10);
        assert_eq!(engine.search(0, &seq), SearchOutcome::Accepted(8..18));

        let scan = engine.scan(&read(&seq));
        assert_eq!(scan.hits.len(), 1);
        assert_eq!(scan.hits[0].strand, Strand::Forward);
        assert_eq!(scan.hits[0].sequence, b"GGGGGGGGGG".to_vec());
        assert_eq!(scan.rejected, 0);
    }

    #[test]
    fn test_reverse_only_region() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let seq = reverse_complement(&amplicon(10));
        assert_eq!(engine.search(0, &seq), SearchOutcome::NoMatch);

        let scan = engine.scan(&read(&seq));
        assert_eq!(scan.hits.len(), 1);
        assert_eq!(scan.hits[0].strand, Strand::Reverse);
        assert_eq!(scan.hits[0].sequence, b"GGGGGGGGGG".to_vec());
    }

    #[test]
    fn test_both_orientations_in_one_read() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let mut seq = amplicon(10);
        seq.extend(reverse_complement(&amplicon(12)));

        let scan = engine.scan(&read(&seq));
        assert_eq!(scan.hits.len(), 2);
        assert_eq!(scan.hits[0].strand, Strand::Forward);
        assert_eq!(scan.hits[0].sequence.len(), 10);
        assert_eq!(scan.hits[1].strand, Strand::Reverse);
        assert_eq!(scan.hits[1].sequence.len(), 12);
    }

    #[test]
    fn test_gate_boundaries_through_engine() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 100)]);
        let engine = ExtractionEngine::new(&catalog);

        for (insert_len, accepted) in [(80, false), (81, true), (119, true), (120, false)] {
            let scan = engine.scan(&read(&amplicon(insert_len)));
            assert_eq!(
                scan.hits.len(),
                usize::from(accepted),
                "insert of {insert_len} bp"
            );
            assert_eq!(scan.rejected, usize::from(!accepted));
        }
    }

    #[test]
    fn test_custom_tolerance() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 100)]);
        let config = ExtractionConfig {
            tolerance: 5,
            ..ExtractionConfig::default()
        };
        let engine = ExtractionEngine::with_config(&catalog, config);

        assert!(engine.scan(&read(&amplicon(104))).hits.len() == 1);
        assert!(engine.scan(&read(&amplicon(105))).hits.is_empty());
        assert_eq!(engine.gate().tolerance(), 5);
    }

    #[test]
    fn test_out_of_order_flanks_are_rejected() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let mut seq = RIGHT.as_bytes().to_vec();
        seq.extend_from_slice(b"GGGGG");
        seq.extend_from_slice(LEFT.as_bytes());

        assert_eq!(
            engine.search(0, &seq),
            SearchOutcome::Rejected { length: 0 }
        );
    }

    #[test]
    fn test_adjacent_flanks_are_rejected() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let seq = format!("{LEFT}{RIGHT}");
        assert_eq!(
            engine.search(0, seq.as_bytes()),
            SearchOutcome::Rejected { length: 0 }
        );
    }

    #[test]
    fn test_overlapping_flanks_are_rejected() {
        let catalog = FlankCatalog::new(vec![pair("AACCGG", "CCGGTT", 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let scan = engine.scan(&read(b"AACCGGTT"));
        assert!(scan.hits.is_empty());
        assert_eq!(scan.rejected, 2);
    }

    #[test]
    fn test_first_occurrence_is_used() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let mut seq = amplicon(10);
        seq.extend(amplicon(40));

        assert_eq!(engine.search(0, &seq), SearchOutcome::Accepted(8..18));
    }

    #[test]
    fn test_single_flank_is_no_match() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let seq = format!("{LEFT}GGGGGGGGGG");
        assert_eq!(engine.search(0, seq.as_bytes()), SearchOutcome::NoMatch);

        let scan = engine.scan(&read(seq.as_bytes()));
        assert!(scan.hits.is_empty());
        assert_eq!(scan.rejected, 0);
    }

    #[test]
    fn test_every_matching_pair_contributes() {
        let catalog = FlankCatalog::new(vec![
            pair(LEFT, RIGHT, 10),
            pair("GGGG", RIGHT, 8),
            pair("TTTTTTTTTT", "CCCCCCCCCC", 10),
        ]);
        let engine = ExtractionEngine::new(&catalog);

        let scan = engine.scan(&read(&amplicon(10)));
        let pairs: Vec<usize> = scan.hits.iter().map(|h| h.pair_index).collect();
        assert_eq!(pairs, vec![0, 1]);
        assert_eq!(scan.hits[1].sequence, b"GGGGGG".to_vec());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);

        let seq = amplicon(10).to_ascii_lowercase();
        assert!(engine.scan(&read(&seq)).hits.is_empty());
    }

    #[test]
    fn test_empty_catalog_and_empty_read() {
        let empty = FlankCatalog::default();
        let engine = ExtractionEngine::new(&empty);
        assert_eq!(engine.scan(&read(&amplicon(10))), ReadScan::default());

        let catalog = FlankCatalog::new(vec![pair(LEFT, RIGHT, 10)]);
        let engine = ExtractionEngine::new(&catalog);
        assert_eq!(engine.scan(&read(b"")), ReadScan::default());
    }
}
