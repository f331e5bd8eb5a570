//! Download-or-skip flow for puzzle inputs

use crate::cache::InputCache;
use crate::coordinate::{Coordinate, LAST_DAY};
use crate::error::FetchError;
use crate::session::Session;
use aoc_http_client::AocClient;
use tracing::{info, warn};

/// What `fetch_one` did for a coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The cache file already existed; nothing was requested
    Cached,
    /// The input was downloaded and written to the cache
    Downloaded { bytes: usize },
}

/// Ensures a cache file exists for each requested coordinate
pub struct InputFetcher {
    client: AocClient,
    cache: InputCache,
}

impl InputFetcher {
    pub fn new(client: AocClient, cache: InputCache) -> Self {
        Self { client, cache }
    }

    /// Fetch one coordinate unless it is already cached
    ///
    /// A non-OK response leaves the cache untouched. No retries.
    pub fn fetch_one(
        &self,
        session: &Session,
        coordinate: &Coordinate,
    ) -> Result<FetchOutcome, FetchError> {
        if self.cache.contains(coordinate) {
            info!("Input already exists for {}", coordinate);
            return Ok(FetchOutcome::Cached);
        }

        info!(
            "Downloading input data for {} from {}",
            coordinate,
            self.client.base_url()
        );
        let input = self
            .client
            .get_input(coordinate.year(), coordinate.day(), session.expose())
            .map_err(|source| {
                warn!("Request failed while downloading {}", coordinate);
                FetchError::Remote {
                    year: coordinate.year().to_string(),
                    day: coordinate.day().to_string(),
                    source,
                }
            })?;

        let path = self.cache.put(coordinate, &input)?;
        info!("Wrote input data for {} to {}", coordinate, path.display());

        Ok(FetchOutcome::Downloaded { bytes: input.len() })
    }

    /// Fetch days `1..=25` of a year in order, stopping at the first failure
    pub fn fetch_all(&self, session: &Session, year: &str) -> Result<(), FetchError> {
        for day in 1..=LAST_DAY {
            let coordinate = Coordinate::new(year, day.to_string())?;
            self.fetch_one(session, &coordinate)
                .map_err(|source| FetchError::Day {
                    year: year.to_string(),
                    day,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}
