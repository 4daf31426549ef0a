use anyhow::{Context, Result};
use clap::{Arg, Command};
use gpx_join::{merge_directory, MergeEvent, MergeOptions, MergeReport, MAX_OUTPUT_BYTES};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        // vergen emits a placeholder when built outside a git checkout
        Some(sha) if !sha.is_empty() && !sha.starts_with("VERGEN") => {
            format!("{} ({})", env!("CARGO_PKG_VERSION"), sha)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn build_command() -> Command {
    let command = Command::new("GPX Join")
        .version(version())
        .about("Join exported GPX files into chronologically ordered files below the Endomondo upload limit.")
        .arg(
            Arg::new("dir")
                .help("Directory containing the exported .gpx files (default: current directory). Files whose name contains 'endomondo' are ignored.")
                .required(false)
                .index(1)
                .value_name("DIR"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for the merged files (default: same as input directory)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("max-bytes")
                .long("max-bytes")
                .help("Size ceiling for each merged file in bytes")
                .value_name("BYTES")
                .value_parser(clap::value_parser!(usize))
                .default_value(MAX_OUTPUT_BYTES.to_string()),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed merge information")
                .action(clap::ArgAction::SetTrue),
        );

    #[cfg(feature = "json")]
    let command = command.arg(
        Arg::new("json")
            .long("json")
            .help("Print the merge report as JSON instead of the completion message")
            .action(clap::ArgAction::SetTrue),
    );

    command
}

fn init_logging(debug: bool) {
    let default_level = if debug { "gpx_join=debug" } else { "gpx_join=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "json")]
fn print_json_report(report: &MergeReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json_report(_report: &MergeReport) -> Result<()> {
    Ok(())
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let input_dir = matches
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let options = MergeOptions {
        input_dir,
        output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
        max_output_bytes: matches
            .get_one::<usize>("max-bytes")
            .copied()
            .unwrap_or(MAX_OUTPUT_BYTES),
    };

    #[cfg(feature = "json")]
    let json = matches.get_flag("json");
    #[cfg(not(feature = "json"))]
    let json = false;

    if debug {
        println!("Options: {options:?}");
    }

    if !json {
        println!("Processing files, please wait");
    }

    let result = merge_directory(&options, |event| {
        if json {
            return;
        }
        match event {
            MergeEvent::Reading(path) => {
                let filename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                println!("Processing: {filename}");
            }
            MergeEvent::Skipped(path) => {
                println!("  no GPS data, skipping {}", path.display());
            }
            MergeEvent::Written { path, tracks } => {
                println!("Wrote {} ({tracks} tracks)", path.display());
            }
        }
    })
    .with_context(|| format!("Failed to merge GPX files in {}", options.input_dir.display()));

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    if json {
        return print_json_report(&report);
    }

    let name_of = |p: Option<&PathBuf>| {
        p.and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    println!();
    println!("All done!");
    println!(
        "Merged {} track(s), skipped {} without GPS data.",
        report.merged,
        report.skipped.len()
    );
    println!(
        "Now import {} - {} into Endomondo.",
        name_of(report.first_output()),
        name_of(report.last_output())
    );

    Ok(())
}
