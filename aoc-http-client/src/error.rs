//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with anything other than 200 OK
    #[error("Invalid HTTP status: {status}\n{body}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
        /// Raw response text, kept for diagnostics
        body: String,
    },

    /// Session token cannot be sent as a cookie header value
    #[error("Invalid session cookie format")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
