use clap::Parser;
use climate_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Climate Analyzer - NOAA Observation Data Summarizer");
    println!("===================================================");
    println!();
    println!("Summarize NOAA tab-delimited climate observation files into per-state");
    println!("aggregate statistics: record counts, averages, temperature extremes,");
    println!("lightning strike totals, and snow cover counts.");
    println!();
    println!("USAGE:");
    println!("    climate-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze TDV observation files and print a summary (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize two observation files in one run:");
    println!("    climate-analyzer analyze data_tn.tdv data_wa.tdv");
    println!();
    println!("    # Machine-readable output for scripting:");
    println!("    climate-analyzer analyze --output-format json data_ca.tdv");
    println!();
    println!("    # Abort on the first malformed record instead of skipping:");
    println!("    climate-analyzer analyze --fail-fast data_ca.tdv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    climate-analyzer <COMMAND> --help");
}
