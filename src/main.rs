use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gnav_report::cli;
use gnav_report::reporting::ReportError;
use gnav_report::utils::clock::RunTimer;

fn main() -> ExitCode {
    let timer = RunTimer::start();
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("gnav_report=debug,info")
    } else {
        EnvFilter::new("gnav_report=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        cli::Commands::Cdna(args) => cli::cdna::run(args, cli.format, &timer),
        cli::Commands::GeneticMap(args) => cli::genetic_map::run(args, cli.format, &timer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ReportError>() {
            Some(report_err @ ReportError::IncompleteScaffoldCheck { .. }) => {
                println!(
                    "Not all scaffolds to be checked against genetic map were successfully checked."
                );
                println!("Maybe something is wrong with the input data?");
                println!("{}", timer.report_time());
                exit_code(report_err.exit_code())
            }
            Some(report_err) => {
                eprintln!("Error: {err:#}");
                exit_code(report_err.exit_code())
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
