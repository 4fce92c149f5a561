//! cDNA-to-genome mapping report.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{CdnaResults, CdnaStatus, LinkageMap};
use crate::reporting::format::{cdna_rows, cdna_rows_with_lg, tsv_row};
use crate::reporting::rate::{percentage, Tally};
use crate::reporting::summary::{output_path, write_lines, Column, SummaryTable};
use crate::reporting::ReportError;
use crate::utils::clock::{Clock, RunTimer};

pub const SUMMARY_TSV_SUFFIX: &str = "results.tsv";
pub const SUMMARY_JIRA_SUFFIX: &str = "results.jira";
pub const FULL_TABLE_SUFFIX: &str = "full-cDNA-results-table.tsv";

/// Counts and percentages of every cDNA bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CdnaSummary {
    /// Distinct reference cDNAs; the denominator of every percentage
    pub total: usize,
    /// Single-copy plus multi-copy complete cDNAs
    pub complete_total: Tally,
    pub complete: Tally,
    pub duplicated: Tally,
    pub fragmented: Tally,
    pub partial: Tally,
    pub poorly_mapped: Tally,
    pub missing: Tally,
    /// All classified cDNAs, as a share of the reference
    pub counted: Tally,
}

impl CdnaSummary {
    /// Summarize `results` against `total` reference cDNAs.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyUniverse` when `total` is zero.
    pub fn compute(results: &CdnaResults, total: usize) -> Result<Self, ReportError> {
        if total == 0 {
            return Err(ReportError::EmptyUniverse("reference cDNAs"));
        }

        let tally = |status| Tally::of(results.count(status), total);
        let complete = tally(CdnaStatus::Complete);
        let duplicated = tally(CdnaStatus::Duplicated);

        let counted_n: usize = CdnaStatus::ALL.iter().map(|s| results.count(*s)).sum();

        Ok(Self {
            total,
            complete_total: Tally {
                count: complete.count + duplicated.count,
                pct: complete.pct.sum_rounded(duplicated.pct),
            },
            complete,
            duplicated,
            fragmented: tally(CdnaStatus::Fragmented),
            partial: tally(CdnaStatus::Partial),
            poorly_mapped: tally(CdnaStatus::PoorlyMapped),
            missing: tally(CdnaStatus::Missing),
            counted: Tally {
                count: counted_n,
                pct: percentage(counted_n, total),
            },
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
            title: "GNAVIGATOR cDNA RESULTS",
            columns: vec![
                column("Complete", "complete sequences", self.complete_total),
                column(
                    "Complete, single copy",
                    "complete, single copy sequences",
                    self.complete,
                ),
                column(
                    "Complete, multiple copies",
                    "complete, multiple copy sequences",
                    self.duplicated,
                ),
                column("Fragmented", "fragmented sequences", self.fragmented),
                column("Partial", "partial sequences", self.partial),
                column("Poorly Mapped", "poorly mapped sequences", self.poorly_mapped),
                column("Missing", "missing sequences", self.missing),
                column(
                    "Total cDNAs searched",
                    "sequences were evaluated",
                    self.counted,
                ),
            ],
        }
    }
}

/// Write the cDNA summary tables and print the console summary.
///
/// Writes `{prefix}-results.tsv` and `{prefix}-results.jira`, then the console
/// block and the timer line to `out`.
///
/// # Errors
///
/// Returns `ReportError::EmptyUniverse` when `total` is zero, or an IO error if
/// a file or `out` cannot be written.
pub fn report_cdna<C: Clock, W: Write + ?Sized>(
    prefix: &str,
    results: &CdnaResults,
    total: usize,
    timer: &RunTimer<C>,
    out: &mut W,
) -> Result<CdnaSummary, ReportError> {
    let summary = CdnaSummary::compute(results, total)?;
    debug!(?summary, "Computed cDNA summary");

    let table = summary.table();
    write_lines(&output_path(prefix, SUMMARY_TSV_SUFFIX), table.tsv_lines())?;
    write_lines(&output_path(prefix, SUMMARY_JIRA_SUFFIX), table.jira_lines())?;
    table.write_console(out, &timer.report_time())?;

    Ok(summary)
}

/// Write every cDNA mapping to `{prefix}-full-cDNA-results-table.tsv`.
///
/// With a linkage map, each row gains a `Linkage group` column. Buckets are
/// written in status order, records within a bucket in their original order.
///
/// # Errors
///
/// Returns an IO error if the file cannot be written.
pub fn output_cdna(
    prefix: &str,
    results: &CdnaResults,
    linkage: Option<&LinkageMap>,
) -> Result<(), ReportError> {
    let mut header = vec!["# cDNA ID", "Status", "Scaffold"];
    if linkage.is_some() {
        header.push("Linkage group");
    }

    let rows = results.records().flat_map(|record| match linkage {
        Some(map) => cdna_rows_with_lg(record, map),
        None => cdna_rows(record),
    });
    let lines = std::iter::once(tsv_row(&header)).chain(rows);

    write_lines(&output_path(prefix, FULL_TABLE_SUFFIX), lines)?;
    info!(records = results.total(), "Exported full cDNA results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CdnaRecord;
    use crate::reporting::missing::find_missing;
    use crate::reporting::rate::Percent;
    use crate::utils::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn records(prefix: &str, n: usize, status: CdnaStatus) -> Vec<CdnaRecord> {
        (0..n)
            .map(|i| CdnaRecord::new(format!("{prefix}{i}"), vec![format!("scaf{i}")], status))
            .collect()
    }

    fn timer() -> RunTimer<FixedClock> {
        RunTimer::with_clock(FixedClock(
            Local.with_ymd_and_hms(2018, 5, 23, 9, 30, 0).unwrap(),
        ))
    }

    /// 100 reference cDNAs, 75 classified, 25 left for the missing finder
    fn scenario_a() -> (CdnaResults, usize) {
        let mut results = CdnaResults::new();
        results.extend(records("c", 50, CdnaStatus::Complete));
        results.extend(records("d", 10, CdnaStatus::Duplicated));
        results.extend(records("p", 5, CdnaStatus::Partial));
        results.extend(records("f", 5, CdnaStatus::Fragmented));
        results.extend(records("x", 5, CdnaStatus::PoorlyMapped));

        let mut universe: Vec<String> = results.keys().map(str::to_string).collect();
        universe.extend((0..25).map(|i| format!("m{i}")));

        let (missing, total) = find_missing(&universe, &results);
        results.extend(missing);
        (results, total)
    }

    #[test]
    fn test_scenario_a_summary() {
        let (results, total) = scenario_a();
        assert_eq!(total, 100);

        let summary = CdnaSummary::compute(&results, total).unwrap();
        assert_eq!(summary.missing, Tally { count: 25, pct: Percent(25.0) });
        assert_eq!(summary.complete_total, Tally { count: 60, pct: Percent(60.0) });
        assert_eq!(summary.counted, Tally { count: 100, pct: Percent(100.0) });
        assert_eq!(summary.partial.pct, Percent(5.0));
    }

    #[test]
    fn test_complete_total_sums_rounded_percentages() {
        let mut results = CdnaResults::new();
        results.extend(records("c", 1, CdnaStatus::Complete));
        results.extend(records("d", 1, CdnaStatus::Duplicated));
        results.extend(records("m", 1, CdnaStatus::Missing));

        let summary = CdnaSummary::compute(&results, 3).unwrap();
        assert_eq!(summary.complete.pct, Percent(33.33));
        assert_eq!(summary.complete_total.pct, Percent(66.66));
        assert_eq!(percentage(2, 3), Percent(66.67));
        assert_eq!(summary.counted.pct, Percent(100.0));
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let result = CdnaSummary::compute(&CdnaResults::new(), 0);
        assert!(matches!(result, Err(ReportError::EmptyUniverse(_))));
    }

    #[test]
    fn test_report_cdna_writes_matching_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();
        let (results, total) = scenario_a();

        let mut console = Vec::new();
        report_cdna(&prefix, &results, total, &timer(), &mut console).unwrap();

        let tsv = std::fs::read_to_string(format!("{prefix}-results.tsv")).unwrap();
        assert_eq!(
            tsv,
            "\tComplete\tComplete, single copy\tComplete, multiple copies\tFragmented\tPartial\tPoorly Mapped\tMissing\tTotal cDNAs searched\n\
             Number\t60\t50\t10\t5\t5\t5\t25\t100\n\
             Percent\t60.0\t50.0\t10.0\t5.0\t5.0\t5.0\t25.0\t100.0\n"
        );

        let jira = std::fs::read_to_string(format!("{prefix}-results.jira")).unwrap();
        assert_eq!(
            jira,
            "||Complete||Complete, single copy||Complete, multiple copies||Fragmented||Partial||Poorly Mapped||Missing||Total cDNAs searched||\n\
             |60 (60.0%)|50 (50.0%)|10 (10.0%)|5 (5.0%)|5 (5.0%)|5 (5.0%)|25 (25.0%)|100 (100.0%)|\n"
        );

        let console = String::from_utf8(console).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines[1], "=== GNAVIGATOR cDNA RESULTS ===");
        assert_eq!(lines[2], "60 (60.0%) complete sequences");
        assert_eq!(lines[8], "25 (25.0%) missing sequences");
        assert_eq!(lines[9], "100 (100.0%) sequences were evaluated");
        assert!(lines[10].starts_with("Finished at 2018-05-23 09:30:00"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_columns_agree_across_formats() {
        let (results, total) = scenario_a();
        let table = CdnaSummary::compute(&results, total).unwrap().table();

        let tsv_header: Vec<String> = table.tsv_lines()[0]
            .split('\t')
            .skip(1)
            .map(str::to_string)
            .collect();
        let jira_header: Vec<String> = table.jira_lines()[0]
            .trim_matches('|')
            .split("||")
            .map(str::to_string)
            .collect();
        assert_eq!(tsv_header, table.labels());
        assert_eq!(jira_header, table.labels());

        let counts: Vec<String> = table.tsv_lines()[1]
            .split('\t')
            .skip(1)
            .map(str::to_string)
            .collect();
        let console_counts: Vec<String> = table
            .console_lines()
            .iter()
            .skip(2)
            .map(|l| l.split(' ').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(counts, console_counts);
    }

    #[test]
    fn test_output_cdna_without_linkage() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();
        let mut results = CdnaResults::new();
        results.push(CdnaRecord::new(
            "tx1",
            vec!["s1".to_string(), "s2".to_string()],
            CdnaStatus::Duplicated,
        ));
        results.push(CdnaRecord::missing("tx2"));

        output_cdna(&prefix, &results, None).unwrap();

        let table = std::fs::read_to_string(format!("{prefix}-full-cDNA-results-table.tsv")).unwrap();
        assert_eq!(
            table,
            "# cDNA ID\tStatus\tScaffold\ntx1\tDuplicated\ts1\ntx1\tDuplicated\ts2\ntx2\tMissing\tNA\n"
        );
    }

    #[test]
    fn test_output_cdna_with_linkage() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().to_string();
        let mut results = CdnaResults::new();
        results.push(CdnaRecord::new("tx1", vec!["s1".to_string()], CdnaStatus::Complete));
        let mut map = LinkageMap::new();
        map.insert("s1", "LG7");

        output_cdna(&prefix, &results, Some(&map)).unwrap();

        let table = std::fs::read_to_string(format!("{prefix}-full-cDNA-results-table.tsv")).unwrap();
        assert_eq!(
            table,
            "# cDNA ID\tStatus\tScaffold\tLinkage group\ntx1\tComplete\ts1\tLG7\n"
        );
    }
}
