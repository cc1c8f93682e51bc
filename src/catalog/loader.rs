//! Pairing and validation of raw flank records.

use tracing::debug;

use crate::catalog::store::{CatalogError, FlankCatalog};
use crate::core::flank::{FlankPair, FlankRecord};

/// Build a catalog from flank records taken two at a time in arrival order
/// (record 0 with 1, 2 with 3, ...).
///
/// Fails on the first bad record; no partial catalog is returned.
///
/// # Errors
///
/// Returns `CatalogError::UnpairedFlankRecord` for a trailing record without a
/// partner, `CatalogError::MalformedDescriptor` if a description lacks a
/// positive length token, `CatalogError::LengthMismatch` if the two records of
/// a pair declare different lengths, or `CatalogError::EmptyFlank` if either
/// flank has no bases.
pub fn load<I>(records: I) -> Result<FlankCatalog, CatalogError>
where
    I: IntoIterator<Item = FlankRecord>,
{
    let mut records = records.into_iter();
    let mut pairs = Vec::new();

    while let Some(left) = records.next() {
        let Some(right) = records.next() else {
            return Err(CatalogError::UnpairedFlankRecord { name: left.name });
        };
        let pair = build_pair(left, right)?;
        debug!(
            "Loaded flank pair {} (expected length {})",
            pair.label(),
            pair.expected_length
        );
        pairs.push(pair);
    }

    Ok(FlankCatalog::new(pairs))
}

/// Validate one left/right record pair
fn build_pair(left: FlankRecord, right: FlankRecord) -> Result<FlankPair, CatalogError> {
    let left_length = parse_expected_length(&left)?;
    let right_length = parse_expected_length(&right)?;

    if left_length != right_length {
        return Err(CatalogError::LengthMismatch {
            left_name: left.name,
            left_length,
            right_name: right.name,
            right_length,
        });
    }

    for record in [&left, &right] {
        if record.sequence.is_empty() {
            return Err(CatalogError::EmptyFlank {
                name: record.name.clone(),
            });
        }
    }

    Ok(FlankPair::new(left, right, left_length))
}

/// Parse the expected target length from the second whitespace-delimited
/// token of a record's description.
///
/// # Errors
///
/// Returns `CatalogError::MalformedDescriptor` if the token is missing, not an
/// integer, or zero.
pub fn parse_expected_length(record: &FlankRecord) -> Result<u64, CatalogError> {
    record
        .description
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<u64>().ok())
        .filter(|&length| length > 0)
        .ok_or_else(|| CatalogError::MalformedDescriptor {
            name: record.name.clone(),
            description: record.description.clone(),
        })
}
