//! Cell and row rendering for the TSV and Jira outputs.

use crate::core::{CdnaRecord, GmRecord, LinkageMap, NOT_AVAILABLE};
use crate::reporting::rate::Tally;

pub const TSV_SEPARATOR: &str = "\t";

/// Jira table cell for a count and its percentage, e.g. `42 (12.5%)`
#[must_use]
pub fn pair_cell(tally: Tally) -> String {
    format!("{} ({}%)", tally.count, tally.pct)
}

/// Jira header row: `||A||B||`
#[must_use]
pub fn jira_header(labels: &[&str]) -> String {
    format!("||{}||", labels.join("||"))
}

/// Jira data row: `|a|b|`
#[must_use]
pub fn jira_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("|{}|", cells.join("|"))
}

/// Tab-separated row
#[must_use]
pub fn tsv_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    cells.join(TSV_SEPARATOR)
}

/// Rows of the full cDNA table: cDNA ID, status, scaffold.
///
/// One row per scaffold the cDNA mapped to.
#[must_use]
pub fn cdna_rows(record: &CdnaRecord) -> Vec<String> {
    record
        .locations()
        .into_iter()
        .map(|scaffold| tsv_row(&[record.id.as_str(), record.status.label(), scaffold]))
        .collect()
}

/// Rows of the full cDNA table with a trailing linkage-group column.
///
/// Scaffolds absent from the map, and unmapped cDNAs, get `NA`.
#[must_use]
pub fn cdna_rows_with_lg(record: &CdnaRecord, linkage: &LinkageMap) -> Vec<String> {
    record
        .locations()
        .into_iter()
        .map(|scaffold| {
            let groups = linkage
                .get(scaffold)
                .filter(|g| !g.is_empty())
                .map_or_else(|| NOT_AVAILABLE.to_string(), |g| g.join(","));
            tsv_row(&[record.id.as_str(), record.status.label(), scaffold, groups.as_str()])
        })
        .collect()
}

/// Rows of the full genetic-map table: scaffold, cDNA ID, status, linkage groups.
///
/// One row per genetic-map cDNA aligned to the scaffold.
#[must_use]
pub fn gm_rows(record: &GmRecord) -> Vec<String> {
    let groups = record.linkage_group_label();
    record
        .cdna_ids
        .iter()
        .map(|cdna| {
            tsv_row(&[
                record.scaffold.as_str(),
                cdna.as_str(),
                record.status.label(),
                groups.as_str(),
            ])
        })
        .collect()
}
