//! Parser for flank FASTA files using noodles.
//!
//! Each record becomes a [`FlankRecord`]. The definition line is kept whole
//! (name and description joined by a space) since the expected target length
//! is read from its second token by the catalog loader.
//!
//! ```text
//! >amp1_F 150
//! ACGTACGTAC
//! >amp1_R 150
//! TTGACCAGTA
//! ```

use std::io::BufRead;
use std::path::Path;

use noodles::fasta;

use crate::core::flank::FlankRecord;
use crate::parsing::{open_input, ParseError};

/// Read every record of a flank FASTA file (plain or gzipped).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is malformed, or `ParseError::InvalidFormat` if the file holds no
/// records.
pub fn read_flank_records(path: &Path) -> Result<Vec<FlankRecord>, ParseError> {
    let reader = open_input(path)?;
    let mut fasta_reader = fasta::io::Reader::new(reader);

    let records = parse_fasta_reader(&mut fasta_reader)?;
    if records.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "No sequences found in flank file {}",
            path.display()
        )));
    }

    Ok(records)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<FlankRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let description = match record.description() {
            Some(text) => format!("{name} {}", String::from_utf8_lossy(text)),
            None => name.clone(),
        };
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        records.push(FlankRecord::new(name, description, sequence));
    }

    Ok(records)
}
