//! Flank pair catalog loading and storage.
//!
//! A flank file is a FASTA file whose records come in consecutive pairs: a
//! left flank followed by its right flank. The second token of each
//! definition line is the expected length of the region between the flanks,
//! and both records of a pair must agree on it.
//!
//! ```text
//! >amp1_F 150
//! ACGTACGTACGTAC
//! >amp1_R 150
//! TTGACCAGTAGGCA
//! >amp2_F 210
//! ...
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use flank_extract::FlankCatalog;
//! use std::path::Path;
//!
//! let catalog = FlankCatalog::load_from_file(Path::new("flanks.fa")).unwrap();
//! for pair in catalog.iter() {
//!     println!("{} expects {} bp", pair.label(), pair.expected_length);
//! }
//! ```

pub mod loader;
pub mod store;
