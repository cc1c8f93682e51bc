use serde::{Deserialize, Serialize};

/// Orientation of the read sequence in which a region was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// The read as sequenced
    Forward,
    /// The reverse complement of the read
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// A target region that passed the length gate and was assigned an ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRegion {
    /// Run-wide emission counter, starting at 0
    pub ordinal: u64,

    /// Bases between the two flanks, in the orientation they were found
    pub sequence: Vec<u8>,

    /// Name of the read the region came from
    pub read_name: String,

    /// Index of the matching pair in the catalog
    pub pair_index: usize,

    /// Orientation the flanks were found in
    pub strand: Strand,
}

impl ExtractedRegion {
    /// Header written to the output, without the leading `>`
    pub fn header(&self) -> String {
        format!("Read_{}", self.ordinal)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
