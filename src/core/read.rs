/// A single sequencing read.
///
/// Only the name and bases are kept; qualities are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    /// Read identifier
    pub name: String,

    /// Bases, case as provided by the input
    pub sequence: Vec<u8>,
}

impl Read {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
