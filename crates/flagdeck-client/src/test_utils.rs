//! Test utilities for outbound notifications.
//!
//! Provides a recording [`Notifier`] so dispatch and handler tests can
//! assert on exactly which calls reached the outbound interface.

use std::sync::Mutex;

use flagdeck_core::prelude::*;
use flagdeck_core::{DebugType, GroupId, Rgb};

use crate::notify::Notifier;

/// A single recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyCall {
    Flag { group: GroupId, enabled: bool },
    Color { group: GroupId, color: Rgb },
    DebugType(DebugType),
}

/// Notifier that records every call instead of talking to a server.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<NotifyCall>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every call fails, for failure-path tests.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Snapshot of the calls recorded so far, in order.
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: NotifyCall) -> Result<()> {
        if self.fail {
            return Err(Error::notify("recording notifier set to fail"));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    async fn flag_change(&self, group: &GroupId, enabled: bool) -> Result<()> {
        self.record(NotifyCall::Flag {
            group: group.clone(),
            enabled,
        })
    }

    async fn color_change(&self, group: &GroupId, color: Rgb) -> Result<()> {
        self.record(NotifyCall::Color {
            group: group.clone(),
            color,
        })
    }

    async fn debug_type_change(&self, debug_type: DebugType) -> Result<()> {
        self.record(NotifyCall::DebugType(debug_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_records_in_order() {
        let notifier = RecordingNotifier::new();
        let group = GroupId::from_raw("cpu_limit");

        tokio_test::block_on(async {
            notifier.flag_change(&group, true).await.unwrap();
            notifier.color_change(&group, Rgb::new(1, 2, 3)).await.unwrap();
            notifier.debug_type_change(DebugType::Speeds).await.unwrap();
        });

        assert_eq!(
            notifier.calls(),
            vec![
                NotifyCall::Flag {
                    group: group.clone(),
                    enabled: true
                },
                NotifyCall::Color {
                    group,
                    color: Rgb::new(1, 2, 3)
                },
                NotifyCall::DebugType(DebugType::Speeds),
            ]
        );
    }

    #[test]
    fn test_failing_notifier_records_nothing() {
        let notifier = RecordingNotifier::failing();
        let group = GroupId::from_raw("io_flag");

        let result = tokio_test::block_on(notifier.flag_change(&group, false));
        assert!(matches!(result, Err(Error::Notify { .. })));
        assert!(notifier.calls().is_empty());
    }
}
