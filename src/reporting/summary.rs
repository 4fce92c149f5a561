//! Summary tables shared by the cDNA and genetic-map reports.
//!
//! A [`SummaryTable`] holds its columns once; the TSV file, the Jira file and
//! the console block are all rendered from that single list, so they always
//! agree on column order and labels.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::reporting::format::{jira_header, jira_row, pair_cell, tsv_row};
use crate::reporting::rate::Tally;

/// One reported category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Column {
    /// Header label in the TSV and Jira tables
    pub label: &'static str,

    /// Trailing text of the console line
    #[serde(skip)]
    pub description: &'static str,

    #[serde(flatten)]
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// Console banner
    #[serde(skip)]
    pub title: &'static str,
    pub columns: Vec<Column>,
}

impl SummaryTable {
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    /// Header, `Number` and `Percent` rows
    #[must_use]
    pub fn tsv_lines(&self) -> Vec<String> {
        let mut header = vec![String::new()];
        let mut nums = vec!["Number".to_string()];
        let mut pcts = vec!["Percent".to_string()];
        for column in &self.columns {
            header.push(column.label.to_string());
            nums.push(column.tally.count.to_string());
            pcts.push(column.tally.pct.to_string());
        }
        vec![tsv_row(&header), tsv_row(&nums), tsv_row(&pcts)]
    }

    /// Header row and a single row of `count (pct%)` cells
    #[must_use]
    pub fn jira_lines(&self) -> Vec<String> {
        let cells: Vec<String> = self.columns.iter().map(|c| pair_cell(c.tally)).collect();
        vec![jira_header(&self.labels()), jira_row(&cells)]
    }

    /// Banner followed by one `count (pct%) description` line per column
    #[must_use]
    pub fn console_lines(&self) -> Vec<String> {
        let mut lines = vec![String::new(), format!("=== {} ===", self.title)];
        lines.extend(self.columns.iter().map(|c| {
            format!("{} ({}%) {}", c.tally.count, c.tally.pct, c.description)
        }));
        lines
    }

    /// Print the console block, ending with `trailer`
    ///
    /// # Errors
    ///
    /// Returns an IO error if writing to `out` fails.
    pub fn write_console<W: Write + ?Sized>(&self, out: &mut W, trailer: &str) -> std::io::Result<()> {
        for line in self.console_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{trailer}")?;
        out.flush()
    }
}

/// Output file name for a run: `{prefix}-{suffix}`
#[must_use]
pub fn output_path(prefix: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}-{suffix}"))
}

/// Create (or truncate) `path` and write one line per item
///
/// # Errors
///
/// Returns an IO error if the file cannot be created or written.
pub fn write_lines<I, S>(path: &Path, lines: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
