//! Flank-bounded region extraction.
//!
//! - [`ExtractionEngine`]: Searches each read against every catalog pair
//! - [`Regions`]: Lazy stream of numbered regions over a read stream
//! - [`Extractor`]: Writes the region stream to a [`RegionSink`]
//! - [`LengthGate`]: The tolerance check applied to candidate regions
//!
//! ## Algorithm
//!
//! For every read and every flank pair, in catalog order:
//!
//! 1. Find the first occurrence of the left and right flank in the read.
//!    If both occur, the candidate is the sequence between the end of the
//!    left flank and the start of the right flank.
//! 2. Repeat on the reverse complement of the read, independently.
//! 3. Accept a candidate of length `len` iff
//!    `expected - tolerance < len < expected + tolerance`. Out-of-order or
//!    overlapping flanks give an empty candidate, which is never accepted.
//! 4. Number accepted regions with one run-wide counter, forward before
//!    reverse, and write them out immediately.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flank_extract::extraction::{ExtractionConfig, ExtractionEngine, Extractor, FastaRegionWriter};
//! use flank_extract::parsing::fastq::FastqReads;
//! use flank_extract::FlankCatalog;
//! use std::path::Path;
//!
//! let catalog = FlankCatalog::load_from_file(Path::new("flanks.fa")).unwrap();
//! let engine = ExtractionEngine::with_config(&catalog, ExtractionConfig::default());
//!
//! let sink = FastaRegionWriter::new(std::io::stdout());
//! let mut extractor = Extractor::new(engine, sink);
//! let stats = extractor.run(FastqReads::open(Path::new("reads.fastq.gz")).unwrap()).unwrap();
//! eprintln!("{} regions from {} reads", stats.regions_emitted, stats.reads_processed);
//! ```

pub mod engine;
pub mod extractor;
pub mod gate;
pub mod sink;
pub mod stats;
pub mod stream;

pub use engine::{ExtractionConfig, ExtractionEngine, SearchOutcome};
pub use extractor::{ExtractError, Extractor};
pub use gate::LengthGate;
pub use sink::{create_output, FastaRegionWriter, RegionOutput, RegionSink};
pub use stats::ExtractionStats;
pub use stream::Regions;
