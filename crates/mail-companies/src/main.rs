//! `mail-companies <ROOT> --output <FILE>` — tally span text across a mail archive.

use anyhow::{bail, Context, Result};
use clap::Parser;
use mail_companies::output::{self, Styled};
use mail_companies::{run, ExtractorConfig, RunSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mail-companies",
    version,
    about = "Count company names in job-alert emails and write them as CSV"
)]
struct Cli {
    /// Root directory of the mail archive
    #[arg(required_unless_present = "dump_config")]
    root: Option<PathBuf>,

    /// CSV file to write (fragment,count per row)
    #[arg(short, long, required_unless_present = "dump_config")]
    output: Option<PathBuf>,

    /// Only read files whose name ends with this suffix [default: .emlx]
    #[arg(long)]
    extension: Option<String>,

    /// JSON file with repairs, exclusions, selector, and extension
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Suppress the run summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    if let Some(extension) = cli.extension {
        config.extension = extension;
    }

    if cli.dump_config {
        output::print_json(&config)?;
        return Ok(());
    }

    let (Some(root), Some(output_path)) = (cli.root, cli.output) else {
        bail!("both ROOT and --output are required");
    };

    let summary = run(&root, &output_path, &config)
        .with_context(|| format!("tallying mail under {}", root.display()))?;

    if cli.json {
        output::print_json(&summary)?;
    } else if !cli.quiet {
        print_summary(&Styled::new(), &summary);
    }

    Ok(())
}

fn print_summary(s: &Styled, summary: &RunSummary) {
    let size = std::fs::metadata(&summary.output)
        .map(|m| output::format_size(m.len()))
        .unwrap_or_else(|_| "unknown size".to_string());

    eprintln!();
    output::print_check(
        s.ok_sym(),
        "Messages:",
        &format!("{} under {}", summary.files, s.dim(&summary.root.display().to_string())),
    );
    output::print_check(
        s.ok_sym(),
        "Fragments:",
        &format!("{} seen, {} kept", summary.fragments, summary.kept),
    );
    output::print_check(
        s.ok_sym(),
        "Companies:",
        &s.bold(&format!("{} distinct", summary.distinct)),
    );
    output::print_check(
        s.ok_sym(),
        "Wrote:",
        &format!("{} ({size})", s.green(&summary.output.display().to_string())),
    );
}
