//! # flank-extract
//!
//! A library for extracting target regions bounded by known flank pairs from
//! sequencing reads.
//!
//! Amplicon and targeted sequencing runs produce reads in which a variable
//! region of interest sits between two fixed sequences (primers, adapters,
//! conserved anchors). `flank-extract` locates both flanks of every catalog
//! pair in each read, on the forward strand and on the reverse complement,
//! and keeps the region between them when its length is close to what the
//! pair expects.
//!
//! ## Features
//!
//! - **Exact flank search**: First-occurrence substring search, no alignment
//! - **Both orientations**: Every pair is tried on the read and its reverse complement
//! - **Length gate**: Regions must fall strictly within `expected ± tolerance`
//! - **Streaming**: Reads are processed one at a time and regions written immediately
//! - **Compressed I/O**: gzip/bgzip input and gzip output by file extension
//!
//! ## Example
//!
//! ```rust
//! use flank_extract::catalog::loader;
//! use flank_extract::core::{FlankRecord, Read};
//! use flank_extract::extraction::ExtractionEngine;
//!
//! let catalog = loader::load(vec![
//!     FlankRecord::new("amp_F", "amp_F 10", "ACCGGA"),
//!     FlankRecord::new("amp_R", "amp_R 10", "TTCAGC"),
//! ])
//! .unwrap();
//!
//! let engine = ExtractionEngine::new(&catalog);
//! let reads = vec![Ok::<_, std::convert::Infallible>(Read::new(
//!     "read1",
//!     &b"CCACCGGAGGGGGGGGGGTTCAGCAA"[..],
//! ))];
//!
//! for region in engine.regions(reads) {
//!     let region = region.unwrap();
//!     assert_eq!(region.header(), "Read_0");
//!     assert_eq!(region.sequence, b"GGGGGGGGGG".to_vec());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Flank pair loading and validation
//! - [`core`]: Core data types for flanks, reads, and regions
//! - [`extraction`]: Extraction engine, length gate, and output sinks
//! - [`parsing`]: FASTA/FASTQ readers with gzip support
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod extraction;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{CatalogError, FlankCatalog};
pub use crate::core::flank::{FlankPair, FlankRecord};
pub use crate::core::read::Read;
pub use crate::core::region::{ExtractedRegion, Strand};
pub use crate::extraction::engine::{ExtractionConfig, ExtractionEngine};
pub use crate::extraction::extractor::Extractor;
