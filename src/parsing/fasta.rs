//! Reader for cDNA reference FASTA files using noodles.
//!
//! Only sequence identifiers are extracted. The identifier is the token
//! before the first whitespace of the definition line.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read every sequence identifier from a FASTA file, in file order.
///
/// Duplicated identifiers are returned as often as they occur.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no sequences are found.
pub fn read_fasta_ids(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        read_ids(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        read_ids(&mut fasta::io::Reader::new(reader))
    }
}

/// Read identifiers from any buffered FASTA source
///
/// # Errors
///
/// See [`read_fasta_ids`].
pub fn read_ids<R: BufRead>(reader: &mut fasta::io::Reader<R>) -> Result<Vec<String>, ParseError> {
    let mut ids = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        ids.push(String::from_utf8_lossy(record.name()).to_string());
    }

    if ids.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(ids)
}
