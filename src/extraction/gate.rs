use std::ops::RangeInclusive;

/// Length tolerance gate applied to candidate regions.
///
/// A region of length `len` passes iff
/// `expected - tolerance < len < expected + tolerance`, with both bounds
/// exclusive. Zero-length regions never pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthGate {
    tolerance: u64,
}

impl LengthGate {
    pub fn new(tolerance: u64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    /// Check a candidate length against an expected length.
    ///
    /// Evaluated without subtraction so small expected lengths cannot wrap.
    #[must_use]
    pub fn accepts(&self, expected: u64, length: u64) -> bool {
        length > 0
            && length.saturating_add(self.tolerance) > expected
            && length < expected.saturating_add(self.tolerance)
    }

    /// Inclusive range of lengths accepted for `expected`.
    /// Empty when the tolerance is zero.
    #[must_use]
    pub fn accepted_lengths(&self, expected: u64) -> RangeInclusive<u64> {
        let min = expected.saturating_add(1).saturating_sub(self.tolerance).max(1);
        let max = expected.saturating_add(self.tolerance).saturating_sub(1);
        min..=max
    }
}
