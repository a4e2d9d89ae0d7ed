//! The widget-panel capability and its concrete, toolkit-free state.
//!
//! [`PanelHost`] is the small operation set the panel builder drives:
//! create a named section, then add the section's controls. The concrete
//! [`PanelState`] is plain data — the TUI crate renders it, and tests can
//! substitute any recording implementation of the trait.

use flagdeck_core::prelude::*;
use flagdeck_core::GroupId;

/// The kind of control inside a panel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Show/hide toggle; edits are committed on the keypress (finalize-only).
    Toggle,
    /// Color control; edits fire on every intermediate adjustment.
    Color,
}

/// Capability interface the panel builder drives.
///
/// Controls attach to the most recently created section, mirroring how a
/// widget library scopes controls to the open folder. Implementations
/// must reject duplicate section labels and controls added before any
/// section exists.
pub trait PanelHost {
    /// Create a new named sub-section for a group.
    fn add_section(&mut self, label: &str, group: &GroupId) -> Result<()>;

    /// Add a show/hide toggle, bound to the shared config by group id.
    fn add_toggle(&mut self, group: &GroupId) -> Result<()>;

    /// Add a color control, bound to the shared config by group id.
    fn add_color(&mut self, group: &GroupId) -> Result<()>;
}

/// One rendered panel section: a labelled group with its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub label: String,
    pub group: GroupId,
    pub controls: Vec<ControlKind>,
}

/// The concrete panel: the top-level selector is implicit (always
/// present, rendered first), followed by one section per flag group in
/// build order.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    sections: Vec<PanelSection>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[PanelSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&PanelSection> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn current_section_mut(&mut self, group: &GroupId) -> Result<&mut PanelSection> {
        let section = self.sections.last_mut().ok_or_else(|| {
            Error::panel_build(group.as_str(), "control added before any section")
        })?;
        if &section.group != group {
            return Err(Error::panel_build(
                group.as_str(),
                format!("control does not belong to open section '{}'", section.group),
            ));
        }
        Ok(section)
    }
}

impl PanelHost for PanelState {
    fn add_section(&mut self, label: &str, group: &GroupId) -> Result<()> {
        if self.sections.iter().any(|s| s.label == label) {
            return Err(Error::panel_build(
                group.as_str(),
                format!("duplicate section label {label:?}"),
            ));
        }
        self.sections.push(PanelSection {
            label: label.to_string(),
            group: group.clone(),
            controls: Vec::new(),
        });
        Ok(())
    }

    fn add_toggle(&mut self, group: &GroupId) -> Result<()> {
        self.current_section_mut(group)?
            .controls
            .push(ControlKind::Toggle);
        Ok(())
    }

    fn add_color(&mut self, group: &GroupId) -> Result<()> {
        self.current_section_mut(group)?
            .controls
            .push(ControlKind::Color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gid(raw: &str) -> GroupId {
        GroupId::from_raw(raw)
    }

    #[test]
    fn test_add_section_and_controls() {
        let mut panel = PanelState::new();
        let id = gid("cpu_limit");
        panel.add_section("Cpu Limit", &id).unwrap();
        panel.add_toggle(&id).unwrap();
        panel.add_color(&id).unwrap();

        assert_eq!(panel.section_count(), 1);
        let section = panel.section(0).unwrap();
        assert_eq!(section.label, "Cpu Limit");
        assert_eq!(section.group, id);
        assert_eq!(section.controls, vec![ControlKind::Toggle, ControlKind::Color]);
    }

    #[test]
    fn test_duplicate_section_label_is_rejected() {
        let mut panel = PanelState::new();
        panel.add_section("Io Flag", &gid("io_flag")).unwrap();
        let err = panel.add_section("Io Flag", &gid("io_flag")).unwrap_err();
        assert!(matches!(err, Error::PanelBuild { .. }));
        assert!(err.to_string().contains("Io Flag"));
        // The first section is untouched.
        assert_eq!(panel.section_count(), 1);
    }

    #[test]
    fn test_control_without_section_is_rejected() {
        let mut panel = PanelState::new();
        let err = panel.add_toggle(&gid("orphan")).unwrap_err();
        assert!(matches!(err, Error::PanelBuild { .. }));
    }

    #[test]
    fn test_control_for_wrong_section_is_rejected() {
        let mut panel = PanelState::new();
        panel.add_section("Walk", &gid("walk")).unwrap();
        let err = panel.add_color(&gid("bike")).unwrap_err();
        assert!(matches!(err, Error::PanelBuild { .. }));
    }
}
