//! Genetic-map consistency report.

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{GmResults, GmStatus};
use crate::reporting::format::{gm_rows, tsv_row};
use crate::reporting::rate::Tally;
use crate::reporting::summary::{output_path, write_lines, Column, SummaryTable};
use crate::reporting::ReportError;
use crate::utils::clock::{Clock, RunTimer};

pub const SUMMARY_TSV_SUFFIX: &str = "genetic-map-results.tsv";
pub const SUMMARY_JIRA_SUFFIX: &str = "genetic-map-results.jira";
pub const FULL_TABLE_SUFFIX: &str = "full-genetic-map-results-table.tsv";

/// Counts and percentages of every genetic-map bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GmSummary {
    pub good_lg: Tally,
    pub wo_lg: Tally,
    pub diff_lg: Tally,
    pub undet: Tally,
    /// Scaffolds checked, as a share of scaffolds to check
    pub checked: Tally,
}

impl GmSummary {
    /// Summarize `results` for `to_check` distinct scaffolds.
    ///
    /// Bucket percentages are taken over the number of checked scaffolds.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::IncompleteScaffoldCheck` when the buckets do not
    /// hold exactly `to_check` scaffolds, and `ReportError::EmptyUniverse` when
    /// there is nothing to check.
    pub fn compute(to_check: usize, results: &GmResults) -> Result<Self, ReportError> {
        let checked: usize = GmStatus::ALL.iter().map(|s| results.count(*s)).sum();
        if checked != to_check {
            return Err(ReportError::IncompleteScaffoldCheck {
                expected: to_check,
                checked,
            });
        }
        if checked == 0 {
            return Err(ReportError::EmptyUniverse("scaffolds to check"));
        }

        let tally = |status| Tally::of(results.count(status), checked);
        Ok(Self {
            good_lg: tally(GmStatus::GoodLg),
            wo_lg: tally(GmStatus::WoLg),
            diff_lg: tally(GmStatus::DiffLg),
            undet: tally(GmStatus::Undet),
            checked: Tally::of(checked, to_check),
        })
    }

    /// Report columns, in output order
    #[must_use]
    pub fn table(&self) -> SummaryTable {
        let column = |label, description, tally| Column {
            label,
            description,
            tally,
        };
        SummaryTable {
            title: "GNAVIGATOR GENETIC MAP RESULTS",
            columns: vec![
                column(
                    "Same LG, expected order",
                    "case(s) were from the same linkage group and in the expected order.",
                    self.good_lg,
                ),
                column(
                    "Same LG, unexpected order",
                    "case(s) were from the same linkage group, but NOT in the expected order.",
                    self.wo_lg,
                ),
                column(
                    "Different LG",
                    "case(s) were from different linkage groups.",
                    self.diff_lg,
                ),
                column(
                    "Same LG, undetermined order",
                    "case(s) were from the same linkage group but their order could not be determined.",
                    self.undet,
                ),
                column(
                    "Total scaffolds analyzed",
                    "scaffolds had 2+ complete cDNAs from the genetic map aligned to them.",
                    self.checked,
                ),
            ],
        }
    }
}

/// Number of distinct scaffold names
pub fn count_unique<I, S>(scaffolds: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scaffolds
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<HashSet<_>>()
        .len()
}

/// Check the genetic-map results, write the summary tables and print the
/// console summary.
///
/// `scaffolds` lists the scaffolds that should have been checked; repeats are
/// counted once. Nothing is written when the check fails.
///
/// # Errors
///
/// Returns `ReportError::IncompleteScaffoldCheck` when the buckets do not hold
/// every scaffold exactly once, or an IO error if a file or `out` cannot be
/// written.
pub fn report_gm<I, S, C, W>(
    scaffolds: I,
    results: &GmResults,
    prefix: &str,
    timer: &RunTimer<C>,
    out: &mut W,
) -> Result<GmSummary, ReportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: Clock,
    W: Write + ?Sized,
{
    let to_check = count_unique(scaffolds);
    let summary = GmSummary::compute(to_check, results)?;
    debug!(?summary, "Computed genetic map summary");

    let table = summary.table();
    write_lines(&output_path(prefix, SUMMARY_TSV_SUFFIX), table.tsv_lines())?;
    write_lines(&output_path(prefix, SUMMARY_JIRA_SUFFIX), table.jira_lines())?;
    table.write_console(out, &timer.report_time())?;

    Ok(summary)
}

/// Write every checked scaffold to `{prefix}-full-genetic-map-results-table.tsv`,
/// one row per genetic-map cDNA.
///
/// # Errors
///
/// Returns an IO error if the file cannot be written.
pub fn output_gm(prefix: &str, results: &GmResults) -> Result<(), ReportError> {
    let header = tsv_row(&["# Scaffold", "cDNA IDs", "Status", "Linkage group(s)"]);
    let rows = results.records().flat_map(gm_rows);
    write_lines(
        &output_path(prefix, FULL_TABLE_SUFFIX),
        std::iter::once(header).chain(rows),
    )?;
    info!(scaffolds = results.total(), "Exported full genetic map results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GmRecord;
    use crate::reporting::rate::Percent;
    use crate::utils::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn results(counts: [usize; 4]) -> GmResults {
        let mut results = GmResults::new();
        let mut n = 0;
        for (status, count) in GmStatus::ALL.into_iter().zip(counts) {
            for _ in 0..count {
                results.push(GmRecord::new(
                    format!("scaf{n}"),
                    vec![format!("m{n}a"), format!("m{n}b")],
                    status,
                    vec!["LG1".to_string()],
                ));
                n += 1;
            }
        }
        results
    }

    fn scaffold_names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("scaf{i}")).collect()
    }

    fn timer() -> RunTimer<FixedClock> {
        RunTimer::with_clock(FixedClock(
            Local.with_ymd_and_hms(2018, 5, 23, 9, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn test_scenario_b_summary() {
        let summary = GmSummary::compute(20, &results([15, 2, 1, 2])).unwrap();
        assert_eq!(summary.good_lg, Tally { count: 15, pct: Percent(75.0) });
        assert_eq!(summary.wo_lg.pct, Percent(10.0));
        assert_eq!(summary.diff_lg.pct, Percent(5.0));
        assert_eq!(summary.undet.pct, Percent(10.0));
        assert_eq!(summary.checked, Tally { count: 20, pct: Percent(100.0) });
    }

    #[test]
    fn test_mismatch_is_reported() {
        let err = GmSummary::compute(10, &results([5, 2, 1, 1])).unwrap_err();
        assert!(matches!(
            err,
            ReportError::IncompleteScaffoldCheck {
                expected: 10,
                checked: 9
            }
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();
        let mut console = Vec::new();

        let result = report_gm(
            scaffold_names(10),
            &results([5, 2, 1, 1]),
            &prefix,
            &timer(),
            &mut console,
        );

        assert!(matches!(
            result,
            Err(ReportError::IncompleteScaffoldCheck { .. })
        ));
        assert!(console.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_repeated_scaffolds_counted_once() {
        let mut names = scaffold_names(4);
        names.extend(scaffold_names(4));
        assert_eq!(count_unique(&names), 4);
    }

    #[test]
    fn test_empty_check_is_rejected() {
        let result = GmSummary::compute(0, &GmResults::new());
        assert!(matches!(result, Err(ReportError::EmptyUniverse(_))));
    }

    #[test]
    fn test_report_gm_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();
        let mut console = Vec::new();

        report_gm(
            scaffold_names(20),
            &results([15, 2, 1, 2]),
            &prefix,
            &timer(),
            &mut console,
        )
        .unwrap();

        let tsv = std::fs::read_to_string(format!("{prefix}-genetic-map-results.tsv")).unwrap();
        assert_eq!(
            tsv,
            "\tSame LG, expected order\tSame LG, unexpected order\tDifferent LG\tSame LG, undetermined order\tTotal scaffolds analyzed\n\
             Number\t15\t2\t1\t2\t20\n\
             Percent\t75.0\t10.0\t5.0\t10.0\t100.0\n"
        );

        let jira = std::fs::read_to_string(format!("{prefix}-genetic-map-results.jira")).unwrap();
        assert_eq!(
            jira.lines().nth(1),
            Some("|15 (75.0%)|2 (10.0%)|1 (5.0%)|2 (10.0%)|20 (100.0%)|")
        );

        let console = String::from_utf8(console).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines[1], "=== GNAVIGATOR GENETIC MAP RESULTS ===");
        assert_eq!(
            lines[2],
            "15 (75.0%) case(s) were from the same linkage group and in the expected order."
        );
        assert_eq!(
            lines[6],
            "20 (100.0%) scaffolds had 2+ complete cDNAs from the genetic map aligned to them."
        );
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_output_gm_one_row_per_cdna() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();

        output_gm(&prefix, &results([1, 0, 1, 0])).unwrap();

        let table =
            std::fs::read_to_string(format!("{prefix}-full-genetic-map-results-table.tsv")).unwrap();
        assert_eq!(
            table,
            "# Scaffold\tcDNA IDs\tStatus\tLinkage group(s)\n\
             scaf0\tm0a\tgoodLG\tLG1\n\
             scaf0\tm0b\tgoodLG\tLG1\n\
             scaf1\tm1a\tdiffLG\tLG1\n\
             scaf1\tm1b\tdiffLG\tLG1\n"
        );
    }
}
