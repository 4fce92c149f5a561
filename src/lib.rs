//! # gnav-report
//!
//! Summaries of gnavigator genome-completeness results.
//!
//! gnavigator maps a set of cDNAs onto a genome assembly and sorts each cDNA
//! into a status bucket (complete, duplicated, fragmented, ...). Optionally it
//! also checks scaffolds against a genetic map. This crate turns those already
//! classified results into reports:
//!
//! - **Missing cDNAs**: reference cDNAs absent from every bucket
//! - **Summary tables**: counts and percentages per bucket, as TSV and Jira markup
//! - **Console summaries**: the same numbers as readable text
//! - **Full tables**: one row per cDNA/scaffold mapping
//!
//! ## Modules
//!
//! - [`core`]: Status buckets, records and result sets
//! - [`parsing`]: FASTA and TSV readers for report inputs
//! - [`reporting`]: Rate arithmetic, formatting and the report writers
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Run timer

pub mod cli;
pub mod core;
pub mod parsing;
pub mod reporting;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{CdnaRecord, CdnaResults, CdnaStatus, GmRecord, GmResults, GmStatus, LinkageMap};
pub use reporting::cdna::{output_cdna, report_cdna, CdnaSummary};
pub use reporting::gm::{output_gm, report_gm, GmSummary};
pub use reporting::missing::find_missing;
pub use reporting::ReportError;
