use std::collections::HashSet;
use std::path::Path;

use crate::core::{CdnaRecord, CdnaResults};
use crate::parsing::fasta::read_fasta_ids;
use crate::parsing::ParseError;

/// cDNAs of the reference that no result bucket mentions.
///
/// Only the token before the first whitespace of each identifier counts.
/// Returns one `Missing` record per absent cDNA, in no particular order, and
/// the number of distinct reference cDNAs, which is the denominator for every
/// cDNA percentage.
pub fn find_missing<I, S>(reference_ids: I, results: &CdnaResults) -> (Vec<CdnaRecord>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let universe: HashSet<String> = reference_ids
        .into_iter()
        .filter_map(|id| id.as_ref().split_whitespace().next().map(str::to_string))
        .collect();
    let detected: HashSet<&str> = results.keys().collect();

    let missing = universe
        .iter()
        .filter(|id| !detected.contains(id.as_str()))
        .map(CdnaRecord::missing)
        .collect();

    (missing, universe.len())
}

/// [`find_missing`] over the identifiers of a FASTA file.
///
/// # Errors
///
/// Returns a `ParseError` if the FASTA cannot be opened or read.
pub fn find_missing_in_fasta(
    path: &Path,
    results: &CdnaResults,
) -> Result<(Vec<CdnaRecord>, usize), ParseError> {
    let ids = read_fasta_ids(path)?;
    let (missing, total) = find_missing(&ids, results);
    tracing::debug!(
        reference = total,
        missing = missing.len(),
        "Compared reference cDNAs with classified results"
    );
    Ok((missing, total))
}
