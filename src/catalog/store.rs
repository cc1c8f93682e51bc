use std::path::Path;
use thiserror::Error;

use crate::core::flank::FlankPair;
use crate::parsing::{fasta, ParseError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read flank file: {0}")]
    Parse(#[from] ParseError),

    #[error("Malformed descriptor for {name}: expected a positive length as the second token of '{description}'")]
    MalformedDescriptor { name: String, description: String },

    #[error("Lengths don't match for {left_name} and {right_name}: {left_length} != {right_length}")]
    LengthMismatch {
        left_name: String,
        left_length: u64,
        right_name: String,
        right_length: u64,
    },

    #[error("Flank record {name} has no pair partner (odd number of flank records)")]
    UnpairedFlankRecord { name: String },

    #[error("Flank record {name} has an empty sequence")]
    EmptyFlank { name: String },
}

/// An immutable collection of flank pairs, in flank file order.
///
/// Duplicate pairs are kept; every pair is tried against every read.
#[derive(Debug, Clone, Default)]
pub struct FlankCatalog {
    pairs: Vec<FlankPair>,
}

impl FlankCatalog {
    pub fn new(pairs: Vec<FlankPair>) -> Self {
        Self { pairs }
    }

    /// Load and validate a flank FASTA file (plain or gzipped)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the file cannot be read, or any of the
    /// pairing errors from [`crate::catalog::loader::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let records = fasta::read_flank_records(path)?;
        super::loader::load(records)
    }

    pub fn pairs(&self) -> &[FlankPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlankPair> {
        self.pairs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FlankPair> {
        self.pairs.get(index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Export the catalog as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.pairs)
    }
}

impl<'a> IntoIterator for &'a FlankCatalog {
    type Item = &'a FlankPair;
    type IntoIter = std::slice::Iter<'a, FlankPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
