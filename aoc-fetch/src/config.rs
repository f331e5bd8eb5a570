//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::coordinate::Coordinate;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Which coordinates a run covers
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// One day
    Single(Coordinate),
    /// Days 1 through 25 of a year
    AllDays { year: String },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
    /// Session token file (tilde-expanded)
    pub session_file: PathBuf,
    /// Cache root (tilde-expanded)
    pub inputs_dir: PathBuf,
    pub base_url: String,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match args.day {
            Some(day) => Mode::Single(Coordinate::new(args.year, day)?),
            None => Mode::AllDays { year: args.year },
        };

        Ok(Config {
            mode,
            session_file: expand_tilde(&args.session_file),
            inputs_dir: expand_tilde(&args.inputs_dir),
            base_url: args.base_url,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}
