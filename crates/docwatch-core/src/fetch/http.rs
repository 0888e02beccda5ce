use crate::fetch::{errors::FetchError, traits::PageFetcher};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// [`PageFetcher`] backed by a blocking reqwest client.
///
/// Uses the client's default redirect policy and sends no custom headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else if let Some(status) = error.status() {
            FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(event = "core.fetch.request_started", url = url);

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.classify(url, e))
            .inspect_err(|e| {
                warn!(event = "core.fetch.request_failed", url = url, error = %e);
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                self.classify(url, e)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        debug!(
            event = "core.fetch.request_completed",
            url = url,
            status = status,
            body_bytes = body.len()
        );

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve a single canned HTTP response on an ephemeral port.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/models")
    }

    #[test]
    fn test_fetch_returns_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 17\r\nConnection: close\r\n\r\n<p>gemini-2.0</p>",
        );

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.fetch(&url).unwrap(), "<p>gemini-2.0</p>");
    }

    #[test]
    fn test_non_success_status_is_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
        );

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&url).unwrap_err();
        assert!(
            matches!(err, FetchError::Status { status: 404, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_new_keeps_timeout() {
        let fetcher = HttpFetcher::new(Duration::from_secs(15)).unwrap();
        assert_eq!(fetcher.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_url_is_request_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch("not a url").unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }), "got {err:?}");
    }

    #[test]
    fn test_refused_connection_is_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch(&format!("http://127.0.0.1:{port}/models"));
        assert!(result.is_err());
    }
}
