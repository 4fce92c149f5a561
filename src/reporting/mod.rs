//! Summary reports over classified gnavigator results.
//!
//! Data flows one way:
//!
//! ```text
//! ResultSet ──> missing (cDNA only) ──> rate ──> format ──> files + console
//! ```
//!
//! Each full run produces six files named `{prefix}-<suffix>`:
//!
//! | Report | Suffix |
//! |--------|--------|
//! | cDNA | `results.tsv`, `results.jira`, `full-cDNA-results-table.tsv` |
//! | Genetic map | `genetic-map-results.tsv`, `genetic-map-results.jira`, `full-genetic-map-results-table.tsv` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use gnav_report::core::{CdnaRecord, CdnaResults, CdnaStatus};
//! use gnav_report::reporting::{cdna, missing};
//! use gnav_report::utils::clock::RunTimer;
//!
//! let timer = RunTimer::start();
//! let mut results = CdnaResults::new();
//! results.push(CdnaRecord::new("tx1", vec!["scaf1".to_string()], CdnaStatus::Complete));
//!
//! let (missing, total) = missing::find_missing(["tx1", "tx2"], &results);
//! results.extend(missing);
//! cdna::report_cdna("sample", &results, total, &timer, &mut std::io::stdout()).unwrap();
//! ```

pub mod cdna;
pub mod error;
pub mod format;
pub mod gm;
pub mod missing;
pub mod rate;
pub mod summary;

pub use error::{ReportError, EXIT_INCONSISTENT_INPUT};
