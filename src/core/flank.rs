use serde::{Deserialize, Serialize};

/// A flank record as read from the flank file, before pairing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlankRecord {
    /// Record name (first token of the definition line)
    pub name: String,

    /// Full definition line without the leading `>`: the name followed by
    /// free text whose second token is the expected target length
    pub description: String,

    /// Literal flank sequence
    pub sequence: String,
}

impl FlankRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sequence: sequence.into(),
        }
    }
}

/// A validated pair of flanks bounding one target region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlankPair {
    /// Name of the left (5') flank record
    pub name_left: String,

    /// Name of the right (3') flank record
    pub name_right: String,

    /// Exact-match needle for the left flank
    pub sequence_left: String,

    /// Exact-match needle for the right flank
    pub sequence_right: String,

    /// Expected length of the region between the flanks.
    /// Both records of the pair declared this same value.
    pub expected_length: u64,
}

impl FlankPair {
    pub fn new(left: FlankRecord, right: FlankRecord, expected_length: u64) -> Self {
        Self {
            name_left: left.name,
            name_right: right.name,
            sequence_left: left.sequence,
            sequence_right: right.sequence,
            expected_length,
        }
    }

    /// Display label for logs and listings, e.g. `amp1_F/amp1_R`
    pub fn label(&self) -> String {
        format!("{}/{}", self.name_left, self.name_right)
    }
}
