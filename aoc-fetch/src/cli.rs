//! CLI argument parsing using clap

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

/// Advent of Code puzzle input downloader
#[derive(Parser, Debug)]
#[command(
    name = "aoc-fetch",
    about = "Download Advent of Code puzzle inputs into a local cache",
    version
)]
pub struct Args {
    /// Year to download
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub year: String,

    /// Day to download (downloads days 1 through 25 if omitted)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub day: Option<String>,

    /// File holding the session token
    #[arg(long, default_value = "session")]
    pub session_file: PathBuf,

    /// Directory inputs are cached under
    #[arg(long, default_value = "inputs")]
    pub inputs_dir: PathBuf,

    /// Server to download from
    #[arg(long, hide = true, default_value = aoc_http_client::DEFAULT_BASE_URL)]
    pub base_url: String,
}
