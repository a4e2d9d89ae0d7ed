//! HTTP client for the stats endpoint.

use std::time::Duration;

use url::Url;

use flagdeck_core::prelude::*;

use crate::protocol::StatsReply;

/// Default request timeout when the configuration does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One-shot client for the server's stats endpoint.
///
/// Owns the HTTP transport and the JSON decoding; the rest of the system
/// sees only the tagged [`StatsReply`].
#[derive(Debug, Clone)]
pub struct StatsClient {
    base: Url,
    http: reqwest::Client,
}

impl StatsClient {
    /// Create a client for the given server base URL.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the base URL does not parse.
    /// - [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::invalid_url(base_url))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|_| Error::invalid_url(format!("{}/{path}", self.base)))
    }

    /// Fetch the flag group mapping.
    ///
    /// Issued once at startup. A transport failure or non-2xx status maps
    /// to [`Error::Http`]; an unusable body maps to
    /// [`Error::MalformedResponse`]. A well-formed `errors` body is NOT an
    /// `Err` — it decodes to [`StatsReply::Errors`] for the caller to
    /// surface.
    pub async fn fetch_stats(&self) -> Result<StatsReply> {
        let url = self.endpoint("stats")?;
        debug!("Fetching flag groups from {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!("GET {url}: HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;

        StatsReply::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let err = StatsClient::new("not a url", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_new_accepts_http_base_url() {
        let client = StatsClient::new("http://localhost:8080/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_endpoint_joins_stats_path() {
        let client = StatsClient::new("http://localhost:8080/", DEFAULT_TIMEOUT).unwrap();
        let url = client.endpoint("stats").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/stats");
    }
}
