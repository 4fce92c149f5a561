//! Command-line interface for gnav-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **cdna**: Summarize cDNA mapping results against the reference cDNA FASTA
//! - **genetic-map**: Summarize genetic-map consistency of scaffolds
//!
//! ## Usage
//!
//! ```text
//! # cDNA report, with linkage groups added to the full table
//! gnav-report cdna --fasta cdna.fa --results classified.tsv --prefix sample \
//!     --linkage-map lg.tsv
//!
//! # Genetic map report
//! gnav-report genetic-map --alignments gm-alignments.tsv --results gm.tsv --prefix sample
//!
//! # JSON summary for scripting
//! gnav-report --format json cdna --fasta cdna.fa --results classified.tsv --prefix sample
//! ```

use clap::{Parser, Subcommand};

pub mod cdna;
pub mod genetic_map;

#[derive(Parser)]
#[command(name = "gnav-report")]
#[command(version)]
#[command(about = "Summarize gnavigator cDNA and genetic map results")]
#[command(
    long_about = "gnav-report turns classified gnavigator results into summary reports.\n\nFor each report it writes:\n- A TSV summary table\n- A Jira markup summary table\n- A full per-record TSV table\n- A console summary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Console summary format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report how completely the assembly captures a set of cDNAs
    Cdna(cdna::CdnaArgs),

    /// Report whether scaffolds agree with a genetic map
    GeneticMap(genetic_map::GeneticMapArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cdna_command() {
        let cli = Cli::try_parse_from([
            "gnav-report",
            "cdna",
            "--fasta",
            "cdna.fa",
            "--results",
            "res.tsv",
            "--prefix",
            "out/s1",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Commands::Cdna(args) => {
                assert_eq!(args.fasta, PathBuf::from("cdna.fa"));
                assert_eq!(args.prefix, "out/s1");
                assert!(args.linkage_map.is_none());
            }
            Commands::GeneticMap(_) => panic!("expected cdna command"),
        }
    }

    #[test]
    fn test_parse_global_format_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gnav-report",
            "genetic-map",
            "--alignments",
            "aln.tsv",
            "--results",
            "gm.tsv",
            "--prefix",
            "s1",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::GeneticMap(_)));
    }

    #[test]
    fn test_missing_required_argument() {
        assert!(Cli::try_parse_from(["gnav-report", "cdna", "--fasta", "cdna.fa"]).is_err());
    }
}
