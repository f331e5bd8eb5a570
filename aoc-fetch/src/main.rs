//! AOC Fetch - download Advent of Code puzzle inputs into a local cache

mod cache;
mod cli;
mod config;
mod coordinate;
mod error;
mod fetcher;
mod logging;
mod session;

use aoc_http_client::AocClient;
use cache::InputCache;
use clap::Parser;
use cli::Args;
use config::{Config, Mode};
use error::FetchError;
use fetcher::{FetchOutcome, InputFetcher};
use session::Session;
use tracing::info;

fn main() {
    logging::init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    info!("Received year {} and day {:?} as arguments", args.year, args.day);
    let config = Config::from_args(args)?;

    // Read before anything touches the network
    info!("Reading session token from {}", config.session_file.display());
    let session = Session::from_file(&config.session_file)?;

    let client = AocClient::builder()
        .base_url(config.base_url.as_str())?
        .build()?;
    let fetcher = InputFetcher::new(client, InputCache::new(config.inputs_dir));

    match config.mode {
        Mode::Single(coordinate) => {
            info!("Downloading input for {}", coordinate);
            // A rejected request is reported, not fatal, for a single day
            match fetcher.fetch_one(&session, &coordinate) {
                Ok(FetchOutcome::Downloaded { bytes }) => info!("Saved {} bytes", bytes),
                Ok(FetchOutcome::Cached) => {}
                Err(e @ FetchError::Remote { .. }) => eprintln!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        Mode::AllDays { year } => {
            info!("Downloading inputs for all days in year {}", year);
            fetcher.fetch_all(&session, &year)?;
        }
    }

    Ok(())
}
