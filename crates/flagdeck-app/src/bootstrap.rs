//! Bootstrap: construct the session and kick off the one-shot fetch.
//!
//! The runner calls these in order at startup: build the state (the
//! single shared config lives inside it), connect the server-facing
//! clients, then spawn the asynchronous stats fetch whose result comes
//! back through the message channel as `StatsLoaded`/`StatsFetchFailed`.

use tokio::sync::mpsc;

use flagdeck_client::{HttpNotifier, StatsClient};
use flagdeck_core::prelude::*;

use crate::config::Settings;
use crate::message::Message;
use crate::state::AppState;

/// Construct the session state. The top-level debug type selector is
/// part of the panel from the start; group sections arrive with the
/// fetch result.
pub fn init_state(settings: Settings) -> AppState {
    AppState::new(settings)
}

/// Build both server-facing clients from the settings.
///
/// # Errors
///
/// [`Error::InvalidUrl`] when the configured base URL does not parse —
/// fatal, reported before the terminal is taken over.
pub fn connect(settings: &Settings) -> Result<(StatsClient, HttpNotifier)> {
    let timeout = settings.timeout();
    let stats = StatsClient::new(&settings.server.base_url, timeout)?;
    let notifier = HttpNotifier::new(&settings.server.base_url, timeout)?;
    Ok((stats, notifier))
}

/// Issue the single asynchronous stats fetch.
///
/// Exactly one of `StatsLoaded` or `StatsFetchFailed` is delivered; all
/// panel construction happens synchronously in `update()` once the
/// message arrives.
pub fn spawn_stats_fetch(client: StatsClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = match client.fetch_stats().await {
            Ok(reply) => Message::StatsLoaded(reply),
            Err(e) => Message::StatsFetchFailed {
                error: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!("Message channel closed before the stats fetch completed");
        }
    });
}
