use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::{
    CdnaRecord, CdnaResults, CdnaStatus, GmRecord, GmResults, GmStatus, LinkageMap, NOT_AVAILABLE,
};
use crate::parsing::ParseError;

/// Non-empty, non-comment lines with their 1-based line numbers
fn data_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with('#') {
            None
        } else {
            Some((i + 1, line.split('\t').map(str::trim).collect()))
        }
    })
}

fn require_fields(fields: &[&str], n: usize, line_num: usize) -> Result<(), ParseError> {
    if fields.len() < n {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has fewer than {n} fields"
        )));
    }
    Ok(())
}

/// Parse a classified cDNA table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_cdna_results_file(path: &Path) -> Result<CdnaResults, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_cdna_results_text(&content)
}

/// Parse a classified cDNA table with columns: cDNA ID, status, scaffold, [...]
///
/// Consecutive or scattered rows sharing an ID and status are merged into one
/// record listing every scaffold, in row order. A scaffold named on several
/// rows is kept once per row, so each copy of a duplicated cDNA survives a
/// re-export. A scaffold of `NA` means no location.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for short rows or unknown statuses.
pub fn parse_cdna_results_text(text: &str) -> Result<CdnaResults, ParseError> {
    let mut records: Vec<CdnaRecord> = Vec::new();
    let mut index: HashMap<(String, CdnaStatus), usize> = HashMap::new();

    for (line_num, fields) in data_lines(text) {
        require_fields(&fields, 3, line_num)?;

        let id = fields[0];
        let status: CdnaStatus = fields[1]
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("Line {line_num}: {e}")))?;
        let scaffold = fields[2];

        let idx = *index.entry((id.to_string(), status)).or_insert_with(|| {
            records.push(CdnaRecord::new(id, Vec::new(), status));
            records.len() - 1
        });
        if scaffold != NOT_AVAILABLE {
            records[idx].scaffolds.push(scaffold.to_string());
        }
    }

    Ok(records.into_iter().collect())
}

/// Parse a genetic-map result table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_gm_results_file(path: &Path) -> Result<GmResults, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_gm_results_text(&content)
}

/// Parse a genetic-map table with columns: scaffold, cDNA ID, status, [linkage groups]
///
/// Rows for the same scaffold are merged; the scaffold keeps the status of its
/// first row.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for short rows, unknown statuses, or a
/// scaffold listed with two different statuses.
pub fn parse_gm_results_text(text: &str) -> Result<GmResults, ParseError> {
    let mut records: Vec<GmRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (line_num, fields) in data_lines(text) {
        require_fields(&fields, 3, line_num)?;

        let scaffold = fields[0];
        let cdna_id = fields[1];
        let status: GmStatus = fields[2]
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("Line {line_num}: {e}")))?;
        let groups: Vec<String> = fields
            .get(3)
            .filter(|g| !g.is_empty() && **g != NOT_AVAILABLE)
            .map(|g| g.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_default();

        if let Some(&idx) = index.get(scaffold) {
            let rec = &mut records[idx];
            if rec.status != status {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {line_num}: scaffold '{scaffold}' listed as both {} and {status}",
                    rec.status
                )));
            }
            if !rec.cdna_ids.iter().any(|c| c == cdna_id) {
                rec.cdna_ids.push(cdna_id.to_string());
            }
            for g in groups {
                if !rec.linkage_groups.contains(&g) {
                    rec.linkage_groups.push(g);
                }
            }
        } else {
            index.insert(scaffold.to_string(), records.len());
            records.push(GmRecord::new(
                scaffold,
                vec![cdna_id.to_string()],
                status,
                groups,
            ));
        }
    }

    Ok(records.into_iter().collect())
}

/// Parse a linkage map file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_linkage_map_file(path: &Path) -> Result<LinkageMap, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_linkage_map_text(&content)
}

/// Parse a linkage map with columns: scaffold, linkage group(s) (comma separated)
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for rows with fewer than 2 fields.
pub fn parse_linkage_map_text(text: &str) -> Result<LinkageMap, ParseError> {
    let mut map = LinkageMap::new();

    for (line_num, fields) in data_lines(text) {
        require_fields(&fields, 2, line_num)?;
        for group in fields[1].split(',').map(str::trim).filter(|g| !g.is_empty()) {
            map.insert(fields[0], group);
        }
    }

    Ok(map)
}

/// Parse an alignment summary file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_scaffold_universe_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_scaffold_universe_text(&content)
}

/// Unique target scaffold names from an alignment summary table.
///
/// The names come from the `tname` column when the first data line is a header
/// containing one, otherwise from the first column. Order of first appearance
/// is kept.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row lacks the scaffold column.
pub fn parse_scaffold_universe_text(text: &str) -> Result<Vec<String>, ParseError> {
    let mut seen = HashSet::new();
    let mut scaffolds = Vec::new();
    let mut column = 0usize;
    let mut first_data_line = true;

    for (line_num, fields) in data_lines(text) {
        if first_data_line {
            first_data_line = false;
            if let Some(idx) = fields.iter().position(|f| f.eq_ignore_ascii_case("tname")) {
                column = idx;
                continue;
            }
        }

        let name = fields.get(column).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Line {line_num} has no scaffold name in column {}",
                column + 1
            ))
        })?;
        if seen.insert((*name).to_string()) {
            scaffolds.push((*name).to_string());
        }
    }

    Ok(scaffolds)
}
