use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::parsing::tsv::{parse_cdna_results_file, parse_linkage_map_file};
use crate::reporting::cdna::{output_cdna, report_cdna, CdnaSummary};
use crate::reporting::missing::find_missing_in_fasta;
use crate::utils::clock::{Clock, RunTimer};

#[derive(Args)]
pub struct CdnaArgs {
    /// Reference cDNA FASTA (optionally gzip compressed)
    #[arg(long, required = true)]
    pub fasta: PathBuf,

    /// Classified cDNA table: cDNA ID, status, scaffold
    #[arg(long, required = true)]
    pub results: PathBuf,

    /// Prefix for output file names
    #[arg(short, long, required = true)]
    pub prefix: String,

    /// Scaffold to linkage-group table; adds a linkage group column to the full table
    #[arg(long)]
    pub linkage_map: Option<PathBuf>,
}

pub fn run<C: Clock>(
    args: CdnaArgs,
    format: OutputFormat,
    timer: &RunTimer<C>,
) -> anyhow::Result<()> {
    let mut results = parse_cdna_results_file(&args.results)?;
    debug!(
        classified = results.total(),
        path = %args.results.display(),
        "Loaded cDNA results"
    );

    let (missing, total) = find_missing_in_fasta(&args.fasta, &results)?;
    info!(
        "{} of {} reference cDNAs have no result and are reported missing",
        missing.len(),
        total
    );
    results.extend(missing);

    let linkage = args
        .linkage_map
        .as_deref()
        .map(parse_linkage_map_file)
        .transpose()?;
    if let Some(map) = &linkage {
        debug!(scaffolds = map.len(), "Loaded linkage map");
    }

    let summary = match format {
        OutputFormat::Text => {
            report_cdna(&args.prefix, &results, total, timer, &mut std::io::stdout().lock())?
        }
        OutputFormat::Json => {
            let summary = report_cdna(&args.prefix, &results, total, timer, &mut std::io::sink())?;
            print_json_summary(&args, &summary)?;
            summary
        }
    };
    output_cdna(&args.prefix, &results, linkage.as_ref())?;

    debug!(counted = summary.counted.count, "cDNA report complete");
    Ok(())
}

fn print_json_summary(args: &CdnaArgs, summary: &CdnaSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "report": "cdna",
        "fasta": args.fasta.display().to_string(),
        "results": args.results.display().to_string(),
        "prefix": args.prefix,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
