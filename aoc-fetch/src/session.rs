//! Session token loading

use crate::error::CliError;
use std::fmt;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Session token sent as the `session` cookie (zeroized on drop)
pub struct Session(Zeroizing<String>);

impl Session {
    /// Read the token from a file
    ///
    /// A leading byte-order mark is removed; everything else is kept byte
    /// for byte.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let bytes = Zeroizing::new(fs::read(path).map_err(|source| CliError::SessionRead {
            path: path.to_path_buf(),
            source,
        })?);
        let text = std::str::from_utf8(&bytes).map_err(|_| CliError::SessionEncoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_contents(text))
    }

    fn from_contents(contents: &str) -> Self {
        let token = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents);
        Self(Zeroizing::new(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(***)")
    }
}
