//! Core data types for flank-bounded region extraction.
//!
//! - [`FlankRecord`]: A raw flank record as it arrives from the flank file
//! - [`FlankPair`]: A validated left/right flank pair with its expected target length
//! - [`Read`]: A single sequencing read (name and bases)
//! - [`ExtractedRegion`]: An accepted target region with its run-wide ordinal
//! - [`Strand`]: Orientation in which a region was found
//!
//! The [`sequence`] module holds the nucleotide helpers (reverse complement)
//! shared by the extraction engine.

pub mod flank;
pub mod read;
pub mod region;
pub mod sequence;

pub use flank::{FlankPair, FlankRecord};
pub use read::Read;
pub use region::{ExtractedRegion, Strand};
