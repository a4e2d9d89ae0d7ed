//! Stats endpoint body decoding.
//!
//! The server answers `GET /stats` with one of two mutually exclusive
//! shapes: `{"data": {<group>: <usage>, ...}}` on success or
//! `{"errors": <any>}` on failure. Decoding models that as the tagged
//! [`StatsReply`] so callers never probe for field presence.

use serde::Deserialize;

use flagdeck_core::prelude::*;

/// The server's group mapping: raw group key to opaque usage data.
///
/// Usage data is passed through to the flag-info view unmodified; the
/// panel core only ever looks at the keys.
pub type GroupMap = serde_json::Map<String, serde_json::Value>;

/// A raw `/stats` body, before conversion to the public reply type.
///
/// Untagged: serde tries each shape in order, so a body carrying a `data`
/// mapping decodes as `Data` and a body carrying `errors` decodes as
/// `Errors`. Anything else is malformed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawStatsBody {
    Data { data: GroupMap },
    Errors { errors: serde_json::Value },
}

/// Decoded `/stats` reply.
#[derive(Debug, Clone)]
pub enum StatsReply {
    /// Success: the mapping from raw group key to usage data.
    Data(GroupMap),
    /// The server reported an error payload instead of data.
    Errors(serde_json::Value),
}

impl StatsReply {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] when the body is not JSON or carries
    /// neither a `data` mapping nor an `errors` field.
    pub fn parse(body: &str) -> Result<Self> {
        let raw: RawStatsBody = serde_json::from_str(body)
            .map_err(|e| Error::malformed_response(format!("expected data or errors field: {e}")))?;
        Ok(match raw {
            RawStatsBody::Data { data } => StatsReply::Data(data),
            RawStatsBody::Errors { errors } => StatsReply::Errors(errors),
        })
    }

    /// Check if this is a server-reported error
    pub fn is_errors(&self) -> bool {
        matches!(self, StatsReply::Errors(_))
    }

    /// Get a human-readable summary of this reply
    pub fn summary(&self) -> String {
        match self {
            StatsReply::Data(map) => format!("{} flag group(s)", map.len()),
            StatsReply::Errors(errors) => format!("server error: {}", error_details(errors)),
        }
    }
}

/// Render a server error payload for the operator.
///
/// Plain strings are shown as-is; anything else is compact JSON.
pub fn error_details(errors: &serde_json::Value) -> String {
    match errors {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
