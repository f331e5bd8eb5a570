//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Session file missing or unreadable
    #[error("Failed to read session token from {}: {source}", path.display())]
    SessionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session file is not UTF-8 text
    #[error("Session token in {} is not valid UTF-8", path.display())]
    SessionEncoding { path: PathBuf },

    /// Bad year or day argument
    #[error("Invalid puzzle coordinate: {0}")]
    Coordinate(#[from] CoordinateError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Fetch error
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Rejected year/day values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("year must not be empty")]
    EmptyYear,

    #[error("day must not be empty")]
    EmptyDay,
}

/// Errors raised while fetching a single coordinate or a whole year
#[derive(Error, Debug)]
pub enum FetchError {
    /// Bad coordinate
    #[error("Invalid puzzle coordinate: {0}")]
    Coordinate(#[from] CoordinateError),

    /// Remote service did not hand back the input
    #[error("Request failed while downloading year {year} day {day}: {source}")]
    Remote {
        year: String,
        day: String,
        #[source]
        source: aoc_http_client::AocError,
    },

    /// Cache write failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// A day in an all-days run failed; later days were not attempted
    #[error("Error encountered while downloading year {year} day {day}: {source}")]
    Day {
        year: String,
        day: u8,
        #[source]
        source: Box<FetchError>,
    },
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
