//! Readers for the inputs of a report run.
//!
//! - **FASTA files**: cDNA identifiers forming the expected universe
//! - **cDNA result tables**: `cDNA ID`, `Status`, `Scaffold` rows as written by the
//!   full cDNA results export
//! - **Genetic-map result tables**: `Scaffold`, `cDNA ID`, `Status`, `Linkage group(s)`
//! - **Linkage maps**: scaffold to linkage-group assignments
//! - **Alignment summaries**: the `tname` column lists scaffolds to check
//!
//! Lines starting with `#` are comments in every tabular input.

use thiserror::Error;

pub mod fasta;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
