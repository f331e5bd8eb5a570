//! AOC HTTP client implementation

use crate::error::AocError;
use reqwest::StatusCode;
use reqwest::header::{COOKIE, HeaderValue};
use tracing::debug;
use zeroize::Zeroize;

/// Host serving puzzle inputs when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// The main AOC HTTP client
///
/// Issues one blocking GET per call, with the session token carried as a
/// cookie.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input("2024", "1", session)?;
/// println!("Input: {}", String::from_utf8_lossy(&input));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL every request is resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value.map_err(|_| AocError::InvalidSession)?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}/input`
    ///
    /// Segments are used verbatim, so `"01"` and `"1"` address different
    /// resources.
    fn input_url(&self, year: &str, day: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[year, "day", day, "input"]);
        Ok(url)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., `"2024"`)
    /// * `day` - The day (e.g., `"1"`)
    /// * `session` - The session cookie value (without the `session=` prefix)
    ///
    /// # Returns
    ///
    /// The exact bytes of the response body.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - Anything but 200 OK, with the response text
    /// * `AocError::InvalidSession` - Token is not a valid header value
    pub fn get_input(&self, year: &str, day: &str, session: &str) -> Result<Vec<u8>, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.input_url(year, day)?;

        debug!(%url, "requesting puzzle input");
        let response = self.client.get(url).header(COOKIE, cookie_header).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(AocError::InvalidStatus { status, body });
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed here, so a malformed URL fails before any request.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy is always overridden to `Policy::none()`: a redirect
    /// is reported as a non-OK status instead of being followed.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized or the
    /// default base URL cannot be parsed.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AocClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url.scheme(), scheme);
            prop_assert_eq!(client.base_url.host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url.port(), Some(port));
        }
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_custom_client_builder() {
        let custom_builder = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .use_rustls_tls();

        let result = AocClient::builder().client_builder(custom_builder).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AocClient::builder().base_url("not a valid url");
        assert!(result.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/input", year, day);

            let mock = server.mock("GET", expected_path.as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let client = client_for(&server);
            let result = client.get_input(&year.to_string(), &day.to_string(), &session);

            prop_assert!(result.is_ok(), "get_input should succeed for {}/{}", year, day);
            mock.assert();
            prop_assert_eq!(result.unwrap(), b"test input data".to_vec());
        }
    }

    #[test]
    fn test_day_segment_is_not_normalized() {
        let mut server = mockito::Server::new();
        let padded = server
            .mock("GET", "/2022/day/01/input")
            .with_status(200)
            .with_body("padded")
            .expect(1)
            .create();
        let plain = server
            .mock("GET", "/2022/day/1/input")
            .expect(0)
            .create();

        let client = client_for(&server);
        assert_eq!(client.get_input("2022", "01", "abc").unwrap(), b"padded");

        padded.assert();
        plain.assert();
    }

    #[test]
    fn test_body_is_returned_verbatim() {
        let mut server = mockito::Server::new();
        let body: Vec<u8> = vec![0xff, 0xfe, b'1', b'\r', b'\n', b'2', b'\n'];
        let mock = server
            .mock("GET", "/2020/day/3/input")
            .with_status(200)
            .with_body(body.clone())
            .create();

        let client = client_for(&server);
        assert_eq!(client.get_input("2020", "3", "abc").unwrap(), body);
        mock.assert();
    }

    #[test]
    fn test_redirect_is_not_followed() {
        let mut server = mockito::Server::new();
        let home = server.mock("GET", "/").expect(0).create();
        let input = server
            .mock("GET", "/2019/day/1/input")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        let client = client_for(&server);
        let err = client.get_input("2019", "1", "abc").unwrap_err();
        assert!(matches!(
            err,
            AocError::InvalidStatus { status, .. } if status == StatusCode::FOUND
        ));

        home.assert();
        input.assert();
    }

    #[test]
    fn test_session_with_newline_is_rejected() {
        let client = AocClient::builder()
            .base_url("http://127.0.0.1:9")
            .unwrap()
            .build()
            .unwrap();
        let err = client.get_input("2019", "1", "abc\ndef").unwrap_err();
        assert!(matches!(err, AocError::InvalidSession));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status_error_handling(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
            status_code in prop::sample::select(vec![201, 204, 400, 401, 403, 404, 429, 500, 502, 503]),
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/input", year, day);

            let mock = server.mock("GET", expected_path.as_str())
                .with_status(status_code)
                .with_body("Puzzle inputs differ by user.  Please log in to get your puzzle input.")
                .expect(1)
                .create();

            let client = client_for(&server);
            let result = client.get_input(&year.to_string(), &day.to_string(), &session);

            match result {
                Err(AocError::InvalidStatus { status, body }) => {
                    prop_assert_eq!(status.as_u16(), status_code as u16);
                    // 204 carries no body
                    if status_code != 204 {
                        prop_assert!(body.contains("Please log in"));
                    }
                }
                other => prop_assert!(false, "Expected InvalidStatus, got {:?}", other),
            }

            mock.assert();
        }
    }
}
