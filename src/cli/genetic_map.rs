use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::parsing::tsv::{parse_gm_results_file, parse_scaffold_universe_file};
use crate::reporting::gm::{output_gm, report_gm, GmSummary};
use crate::utils::clock::{Clock, RunTimer};

#[derive(Args)]
pub struct GeneticMapArgs {
    /// Alignment summary of genetic-map cDNAs; its `tname` column lists the scaffolds to check
    #[arg(long, required = true)]
    pub alignments: PathBuf,

    /// Genetic map results table: scaffold, cDNA ID, status, linkage group(s)
    #[arg(long, required = true)]
    pub results: PathBuf,

    /// Prefix for output file names
    #[arg(short, long, required = true)]
    pub prefix: String,
}

pub fn run<C: Clock>(
    args: GeneticMapArgs,
    format: OutputFormat,
    timer: &RunTimer<C>,
) -> anyhow::Result<()> {
    let scaffolds = parse_scaffold_universe_file(&args.alignments)?;
    let results = parse_gm_results_file(&args.results)?;
    debug!(
        to_check = scaffolds.len(),
        checked = results.total(),
        "Loaded genetic map inputs"
    );

    match format {
        OutputFormat::Text => {
            report_gm(&scaffolds, &results, &args.prefix, timer, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Json => {
            let summary = report_gm(&scaffolds, &results, &args.prefix, timer, &mut std::io::sink())?;
            print_json_summary(&args, &summary)?;
        }
    }
    output_gm(&args.prefix, &results)?;

    Ok(())
}

fn print_json_summary(args: &GeneticMapArgs, summary: &GmSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "report": "genetic_map",
        "alignments": args.alignments.display().to_string(),
        "results": args.results.display().to_string(),
        "prefix": args.prefix,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
