//! Remote document downloading.
//!
//! Documents may live in object storage behind plain HTTP endpoints;
//! this source downloads them with bounded retry. Backoff belongs here,
//! with the collaborator - the splitter core never retries anything.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use super::{decode_utf8, TextSource};
use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{ChunkerError, Result};

/// User agent string identifying this chunker.
const USER_AGENT: &str = concat!("md-chunker/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors,
/// 5xx responses). Client errors (4xx) fail immediately - they won't
/// succeed on retry.
///
/// # Errors
/// Fails after [`MAX_RETRIES`] transient failures, or immediately on
/// non-retryable errors.
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response.error_for_status()?;
                let bytes = response.bytes()?;
                return Ok(bytes.to_vec());
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(ChunkerError::Http(e));
            }
        }
    }

    Err(ChunkerError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Text source backed by an HTTP endpoint.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for the given URL.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            url: url.into(),
        })
    }
}

impl TextSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        let bytes = download_bytes(&self.client, &self.url).map_err(|e| {
            if let ChunkerError::Http(source) = e {
                ChunkerError::DownloadFailed {
                    url: self.url.clone(),
                    source,
                }
            } else {
                e
            }
        })?;
        decode_utf8(bytes, &self.url)
    }

    fn name(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_create_client() {
        assert!(create_client().is_ok());
    }

    /// Start a mock server on a runtime that stays alive for the test,
    /// so the blocking client can talk to it.
    fn start_server() -> (tokio::runtime::Runtime, MockServer) {
        let rt = tokio::runtime::Runtime::new().expect("runtime starts");
        let server = rt.block_on(MockServer::start());
        (rt, server)
    }

    #[test]
    fn test_download_success() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/guide.md"))
                .respond_with(ResponseTemplate::new(200).set_body_string("# Guide\nhello"))
                .mount(&server),
        );

        let client = create_client().expect("client");
        let bytes =
            download_bytes(&client, &format!("{}/guide.md", server.uri())).expect("downloads");
        assert_eq!(bytes, b"# Guide\nhello");
    }

    #[test]
    fn test_download_client_error_no_retry() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(404))
                .expect(1)
                .mount(&server),
        );

        let client = create_client().expect("client");
        let err = download_bytes(&client, &format!("{}/missing.md", server.uri()))
            .expect_err("must fail");
        assert!(matches!(err, ChunkerError::Http(_)));
    }

    #[test]
    fn test_download_server_error_retries_then_gives_up() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(500))
                .expect(u64::from(MAX_RETRIES))
                .mount(&server),
        );

        let client = create_client().expect("client");
        let err = download_bytes(&client, &format!("{}/flaky.md", server.uri()))
            .expect_err("must fail");
        assert!(matches!(
            err,
            ChunkerError::RetriesExhausted { attempts, .. } if attempts == MAX_RETRIES
        ));
    }

    #[test]
    fn test_http_source_fetch() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/doc.md"))
                .respond_with(ResponseTemplate::new(200).set_body_string("# Doc"))
                .mount(&server),
        );

        let url = format!("{}/doc.md", server.uri());
        let source = HttpSource::new(&url).expect("source");
        assert_eq!(source.fetch().expect("fetches"), "# Doc");
        assert_eq!(source.name(), url);
    }

    #[test]
    fn test_http_source_invalid_utf8() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_bytes(vec![0x23u8, 0x20, 0xff, 0xfe]),
                )
                .mount(&server),
        );

        let source = HttpSource::new(format!("{}/binary.md", server.uri())).expect("source");
        let err = source.fetch().expect_err("must fail");
        assert!(matches!(err, ChunkerError::Encoding { .. }));
    }
}
