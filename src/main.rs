use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::time::Duration;

use getlyr::clean::clean_lyrics;
use getlyr::lyrics::{Fetcher, DEFAULT_TIMEOUT_SECS};

const NOT_FOUND_MESSAGE: &str = "Lyrics not found or service unavailable.";

#[derive(Debug, Parser)]
#[command(name = "getlyr", version, about = "Fetch song lyrics from the command line")]
struct Cli {
    /// Song title. Prompted for when omitted.
    title: Option<String>,

    /// Performing artist. Prompted for when omitted.
    artist: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Skip the lyrics.com scrape when the API has no match.
    #[arg(long)]
    no_fallback: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let title = match cli.title {
        Some(title) => title,
        None => prompt("Song title: ")?,
    };
    let artist = match cli.artist {
        Some(artist) => artist,
        None => prompt("Artist: ")?,
    };

    let fetcher = Fetcher::new(Duration::from_secs(cli.timeout), !cli.no_fallback)?;

    // Lookup failures are reported on stdout, not via the exit status.
    match fetcher.fetch(&title, &artist).await {
        Some(lyrics) => println!("{}", clean_lyrics(&lyrics)),
        None => println!("{}", NOT_FOUND_MESSAGE),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "getlyr=debug,reqwest=warn"
    } else {
        "getlyr=warn,reqwest=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read one line from stdin, prompting on stderr so stdout stays
/// reserved for the lyrics themselves.
fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    std::io::stderr().flush().context("Failed to flush stderr")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok(input.trim().to_string())
}
