//! Outbound change notifications.
//!
//! Operator edits in the panel are pushed back to the server through the
//! [`Notifier`] interface. The wire format and endpoints belong to the
//! implementation; the panel core only guarantees the argument shapes.

use std::time::Duration;

use url::Url;

use flagdeck_core::prelude::*;
use flagdeck_core::{DebugType, GroupId, Rgb};

/// Outbound notification interface for operator edits.
///
/// Calls are fire-and-forget from the UI's perspective: the dispatcher
/// spawns them, logs failures, and never blocks further interaction on
/// them.
#[trait_variant::make(Notifier: Send)]
pub trait LocalNotifier {
    /// Forward a finalized show/hide toggle for the named group.
    async fn flag_change(&self, group: &GroupId, enabled: bool) -> Result<()>;

    /// Forward a color change for the named group.
    ///
    /// May be called once per intermediate value during a continuous edit.
    async fn color_change(&self, group: &GroupId, color: Rgb) -> Result<()>;

    /// Forward a change of the top-level debug view selector.
    async fn debug_type_change(&self, debug_type: DebugType) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// HTTP implementation
// ─────────────────────────────────────────────────────────────────

/// Notifier that POSTs JSON to the debug server.
///
/// Endpoints: `POST {base}/flags/{group}` with `{"show": bool}` or
/// `{"color": "#rrggbb"}`, and `POST {base}/debug_type` with
/// `{"debug_type": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    base: Url,
    http: reqwest::Client,
}

impl HttpNotifier {
    /// Create a notifier for the given server base URL.
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

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|_| Error::invalid_url(format!("{}/{path}", self.base)))
    }

    async fn post(&self, url: Url, body: serde_json::Value) -> Result<()> {
        let response = self
            .http
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::notify(format!("POST {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::notify(format!("POST {url}: HTTP {status}")));
        }
        Ok(())
    }
}

impl Notifier for HttpNotifier {
    async fn flag_change(&self, group: &GroupId, enabled: bool) -> Result<()> {
        let url = self.endpoint(&format!("flags/{group}"))?;
        self.post(url, serde_json::json!({ "show": enabled })).await
    }

    async fn color_change(&self, group: &GroupId, color: Rgb) -> Result<()> {
        let url = self.endpoint(&format!("flags/{group}"))?;
        self.post(url, serde_json::json!({ "color": color })).await
    }

    async fn debug_type_change(&self, debug_type: DebugType) -> Result<()> {
        let url = self.endpoint("debug_type")?;
        self.post(url, serde_json::json!({ "debug_type": debug_type }))
            .await
    }
}
