//! The change dispatcher: executes update actions against the outbound
//! notification interface.
//!
//! Pure forwarding — the model was already mutated by `update()`. Each
//! notification is fire-and-forget: spawned, unordered relative to other
//! groups, never retried. Failures are logged and never roll back the
//! local edit or block further interaction.

use std::sync::Arc;

use flagdeck_client::Notifier;
use flagdeck_core::prelude::*;

use crate::handler::UpdateAction;

/// Forward one action to the notifier, logging any failure.
pub async fn run_action<N: Notifier>(action: UpdateAction, notifier: &N) {
    match action {
        UpdateAction::NotifyFlagChange { group, enabled } => {
            if let Err(e) = notifier.flag_change(&group, enabled).await {
                warn!("Flag change notification for '{group}' failed: {e}");
            }
        }
        UpdateAction::NotifyColorChange { group, color } => {
            if let Err(e) = notifier.color_change(&group, color).await {
                warn!("Color change notification for '{group}' failed: {e}");
            }
        }
        UpdateAction::RefreshStyle { debug_type } => {
            if let Err(e) = notifier.debug_type_change(debug_type).await {
                warn!("Style refresh for '{debug_type}' failed: {e}");
            }
        }
    }
}

/// Spawn an action as an independent, unawaited task.
pub fn handle_action<N>(action: UpdateAction, notifier: &Arc<N>)
where
    N: Notifier + Sync + 'static,
{
    let notifier = Arc::clone(notifier);
    tokio::spawn(async move {
        run_action(action, notifier.as_ref()).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use flagdeck_client::test_utils::{NotifyCall, RecordingNotifier};
    use flagdeck_core::{DebugType, GroupId, Rgb};

    #[test]
    fn test_flag_change_is_forwarded() {
        let notifier = RecordingNotifier::new();
        let group = GroupId::from_raw("cpu_limit");

        tokio_test::block_on(run_action(
            UpdateAction::NotifyFlagChange {
                group: group.clone(),
                enabled: true,
            },
            &notifier,
        ));

        assert_eq!(
            notifier.calls(),
            vec![NotifyCall::Flag {
                group,
                enabled: true
            }]
        );
    }

    #[test]
    fn test_color_change_is_forwarded() {
        let notifier = RecordingNotifier::new();
        let group = GroupId::from_raw("io_flag");
        let color = Rgb::new(10, 20, 30);

        tokio_test::block_on(run_action(
            UpdateAction::NotifyColorChange {
                group: group.clone(),
                color,
            },
            &notifier,
        ));

        assert_eq!(notifier.calls(), vec![NotifyCall::Color { group, color }]);
    }

    #[test]
    fn test_style_refresh_is_forwarded() {
        let notifier = RecordingNotifier::new();

        tokio_test::block_on(run_action(
            UpdateAction::RefreshStyle {
                debug_type: DebugType::Speeds,
            },
            &notifier,
        ));

        assert_eq!(
            notifier.calls(),
            vec![NotifyCall::DebugType(DebugType::Speeds)]
        );
    }

    #[test]
    fn test_notifier_failure_is_swallowed_after_logging() {
        let notifier = RecordingNotifier::failing();

        // Must not panic or propagate; the UI keeps running.
        tokio_test::block_on(run_action(
            UpdateAction::NotifyFlagChange {
                group: GroupId::from_raw("walk"),
                enabled: false,
            },
            &notifier,
        ));

        assert!(notifier.calls().is_empty());
    }
}
