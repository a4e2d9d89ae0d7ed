//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle: connect the server-facing
//! clients, take over the terminal, spawn the one-shot stats fetch, and
//! run the strictly serialized message loop until the operator quits.

use std::sync::Arc;

use tokio::sync::mpsc;

use flagdeck_app::config::Settings;
use flagdeck_app::message::Message;
use flagdeck_app::state::AppState;
use flagdeck_app::{bootstrap, dispatch, handler, Notifier};
use flagdeck_core::prelude::*;

use crate::{event, render};

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the panel session against the configured server.
pub async fn run(settings: Settings) -> Result<()> {
    // Connect before taking over the terminal so a bad base URL stays a
    // readable error on stderr.
    let (stats, notifier) = bootstrap::connect(&settings)?;
    let notifier = Arc::new(notifier);
    info!("Connecting to {}", stats.base_url());

    install_panic_hook();
    let mut term = ratatui::init();

    let mut state = bootstrap::init_state(settings);

    // Unified message channel; the stats fetch reports back through it.
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    bootstrap::spawn_stats_fetch(stats, msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, &notifier);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<N>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    notifier: &Arc<N>,
) -> Result<()>
where
    N: Notifier + Sync + 'static,
{
    while !state.should_quit() {
        // Drain async messages (fetch result) before drawing.
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, notifier);
        }

        terminal.draw(|frame| render::draw(frame, state))?;

        // Blocks for at most one tick; a timeout becomes Message::Tick.
        if let Some(msg) = event::poll(state.settings.ui.tick_rate_ms)? {
            process_message(state, msg, notifier);
        }
    }
    Ok(())
}

/// Process a message through the TEA update function
///
/// Follow-up messages run to completion; actions go to the change
/// dispatcher, which spawns them fire-and-forget.
fn process_message<N>(state: &mut AppState, message: Message, notifier: &Arc<N>)
where
    N: Notifier + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            dispatch::handle_action(action, notifier);
        }
        msg = result.message;
    }
}
