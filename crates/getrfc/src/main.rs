//! `getrfc <number>` — download an RFC and print it to standard output.

use anyhow::Result;
use clap::Parser;
use getrfc::{write_http_error, FetchError, RfcFetcher, RFC_URL_TEMPLATE};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "getrfc",
    version,
    about = "Download RFC texts and print to standard output"
)]
struct Cli {
    /// Enter an RFC number
    number: String,

    /// URL template; every `{}` is replaced by the RFC number
    #[arg(long, default_value = RFC_URL_TEMPLATE, hide = true)]
    url_template: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fetcher = RfcFetcher::new(cli.url_template)?;

    match fetcher.fetch(&cli.number).await {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
            Ok(())
        }
        Err(FetchError::Status {
            status,
            reason,
            url,
        }) => {
            let mut stdout = std::io::stdout().lock();
            write_http_error(&mut stdout, status, &reason, &url)?;
            stdout.flush()?;
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
