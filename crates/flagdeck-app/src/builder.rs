//! The panel builder: one section per server-discovered flag group.
//!
//! Consumes the group mapping, normalizes each raw key, and drives the
//! panel capability — a named section plus a toggle and a color control
//! per group — while extending the shared config with the group's paired
//! show/color entry. No compile-time knowledge of group count or names.

use flagdeck_client::GroupMap;
use flagdeck_core::prelude::*;
use flagdeck_core::{normalize, PanelConfig};

use crate::panel::PanelHost;

/// Build one panel section per entry in the group mapping.
///
/// Groups are processed in the mapping's iteration order; no particular
/// cross-group order is guaranteed or meaningful. After a successful
/// build the config holds exactly one show/color pair per input key and
/// the panel one section (with exactly two controls) per group.
///
/// # Errors
///
/// [`Error::PanelBuild`] naming the offending raw key when the capability
/// rejects a section or control (e.g. duplicate label). Construction is
/// fail-stop: remaining groups are not built, already-built sections and
/// their config entries remain intact.
pub fn build<P: PanelHost>(
    groups: &GroupMap,
    config: &mut PanelConfig,
    panel: &mut P,
) -> Result<()> {
    for raw_key in groups.keys() {
        let name = normalize(raw_key);
        debug!("Building panel section '{}' for key '{raw_key}'", name.label);

        let wrap = |e: Error| {
            let message = match e {
                Error::PanelBuild { message, .. } => message,
                other => other.to_string(),
            };
            Error::panel_build(raw_key.clone(), message)
        };

        panel.add_section(&name.label, &name.id).map_err(wrap)?;
        // The paired show/color entry appears together with the section.
        config.insert_group(name.id.clone());
        panel.add_toggle(&name.id).map_err(wrap)?;
        panel.add_color(&name.id).map_err(wrap)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use flagdeck_core::{GroupId, Rgb};

    use crate::panel::PanelState;

    /// Capability fake that records every call, for wiring assertions.
    #[derive(Debug, Default)]
    struct RecordingHost {
        calls: Vec<String>,
        fail_on_section: Option<String>,
    }

    impl PanelHost for RecordingHost {
        fn add_section(&mut self, label: &str, group: &GroupId) -> Result<()> {
            if self.fail_on_section.as_deref() == Some(label) {
                return Err(Error::panel_build(group.as_str(), "synthetic rejection"));
            }
            self.calls.push(format!("section:{label}:{group}"));
            Ok(())
        }

        fn add_toggle(&mut self, group: &GroupId) -> Result<()> {
            self.calls.push(format!("toggle:{group}"));
            Ok(())
        }

        fn add_color(&mut self, group: &GroupId) -> Result<()> {
            self.calls.push(format!("color:{group}"));
            Ok(())
        }
    }

    fn group_map(body: &str) -> GroupMap {
        match serde_json::from_str::<serde_json::Value>(body).unwrap() {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_build_creates_section_and_paired_entries_per_group() {
        let groups = group_map(r#"{"cpu_limit":{"count":3},"io_flag":{"count":1}}"#);
        let mut config = PanelConfig::new();
        let mut panel = PanelState::new();

        build(&groups, &mut config, &mut panel).unwrap();

        assert_eq!(panel.section_count(), 2);
        for raw in ["cpu_limit", "io_flag"] {
            let id = GroupId::from_raw(raw);
            assert_eq!(config.show(&id), Some(false));
            assert_eq!(config.color(&id), Some(Rgb::DEFAULT));
            let section = panel
                .sections()
                .iter()
                .find(|s| s.group == id)
                .expect("section for group");
            assert_eq!(section.controls.len(), 2);
        }
        let labels: Vec<&str> = panel.sections().iter().map(|s| s.label.as_str()).collect();
        assert!(labels.contains(&"Cpu Limit"));
        assert!(labels.contains(&"Io Flag"));
    }

    #[test]
    fn test_build_wires_controls_in_section_order() {
        let groups = group_map(r#"{"walk":{}}"#);
        let mut config = PanelConfig::new();
        let mut host = RecordingHost::default();

        build(&groups, &mut config, &mut host).unwrap();

        assert_eq!(
            host.calls,
            vec!["section:Walk:walk", "toggle:walk", "color:walk"]
        );
    }

    #[test]
    fn test_build_empty_mapping_is_a_no_op() {
        let groups = group_map("{}");
        let mut config = PanelConfig::new();
        let mut panel = PanelState::new();

        build(&groups, &mut config, &mut panel).unwrap();

        assert!(panel.is_empty());
        assert!(config.is_empty());
    }

    #[test]
    fn test_build_fails_fast_naming_offending_key() {
        // Two raw keys that normalize to the same label collide.
        let groups = group_map(r#"{"Io_Flag":{},"io_flag":{}}"#);
        let mut config = PanelConfig::new();
        let mut panel = PanelState::new();

        let err = build(&groups, &mut config, &mut panel).unwrap_err();
        match &err {
            Error::PanelBuild { group, .. } => {
                assert!(group.eq_ignore_ascii_case("io_flag"), "got {group:?}");
            }
            other => panic!("expected PanelBuild, got {other:?}"),
        }
        // Fail-stop, not rollback: the first section survives.
        assert_eq!(panel.section_count(), 1);
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_build_aborts_remaining_groups_on_failure() {
        let groups = group_map(r#"{"a":{},"b":{},"c":{}}"#);
        let mut config = PanelConfig::new();
        let mut host = RecordingHost {
            fail_on_section: Some("B".to_string()),
            ..Default::default()
        };

        build(&groups, &mut config, &mut host).unwrap_err();

        // "a" was fully built, "b" failed, "c" was never attempted.
        assert_eq!(
            host.calls,
            vec!["section:A:a", "toggle:a", "color:a"]
        );
        assert!(config.contains(&GroupId::from_raw("a")));
        assert!(!config.contains(&GroupId::from_raw("b")));
        assert!(!config.contains(&GroupId::from_raw("c")));
    }

    #[test]
    fn test_build_is_case_canonicalizing() {
        let groups = group_map(r#"{"CPU_Limit":{}}"#);
        let mut config = PanelConfig::new();
        let mut panel = PanelState::new();

        build(&groups, &mut config, &mut panel).unwrap();

        let id = GroupId::from_raw("cpu_limit");
        assert!(config.contains(&id));
        assert_eq!(panel.section(0).unwrap().label, "CPU Limit");
    }
}
