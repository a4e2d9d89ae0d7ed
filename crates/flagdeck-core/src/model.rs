//! Shared panel configuration — the model every control is bound to.
//!
//! A single [`PanelConfig`] instance exists per session. It holds the
//! top-level debug view selector plus one paired show/color entry per
//! discovered flag group, keyed by the group's canonical identifier.
//! Entries are appended during panel build and mutated only by UI
//! interaction; they are never removed.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─────────────────────────────────────────────────────────────────
// Debug view selector
// ─────────────────────────────────────────────────────────────────

/// Which server-side debug overlay the panel emphasizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugType {
    #[default]
    Permissions,
    Flags,
    Speeds,
}

impl DebugType {
    /// The fixed enumerated set offered by the top-level selector.
    pub const ALL: [DebugType; 3] = [DebugType::Permissions, DebugType::Flags, DebugType::Speeds];

    /// Wire/display name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            DebugType::Permissions => "permissions",
            DebugType::Flags => "flags",
            DebugType::Speeds => "speeds",
        }
    }

    /// Next selector value, wrapping around.
    pub fn next(self) -> Self {
        match self {
            DebugType::Permissions => DebugType::Flags,
            DebugType::Flags => DebugType::Speeds,
            DebugType::Speeds => DebugType::Permissions,
        }
    }

    /// Previous selector value, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            DebugType::Permissions => DebugType::Speeds,
            DebugType::Flags => DebugType::Permissions,
            DebugType::Speeds => DebugType::Flags,
        }
    }
}

impl fmt::Display for DebugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Canonical group identifier
// ─────────────────────────────────────────────────────────────────

/// Canonical identifier for a flag group: the lowercased raw server key.
///
/// Used verbatim as the binding key between the config model, the panel
/// sections, and outbound notifications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Canonical form of a raw server key.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────
// Color value
// ─────────────────────────────────────────────────────────────────

/// A color channel, for stepwise editing in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Channel::Red => Channel::Blue,
            Channel::Green => Channel::Red,
            Channel::Blue => Channel::Green,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// An RGB color value, carried as `#rrggbb` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default color assigned to a group when its section is built.
    pub const DEFAULT: Rgb = Rgb {
        r: 0x29,
        g: 0xab,
        b: 0xe2,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// This color with one channel nudged by `delta`, saturating at 0/255.
    pub fn nudged(&self, channel: Channel, delta: i16) -> Self {
        let apply = |v: u8| (v as i16 + delta).clamp(0, 255) as u8;
        let mut out = *self;
        match channel {
            Channel::Red => out.r = apply(out.r),
            Channel::Green => out.g = apply(out.g),
            Channel::Blue => out.b = apply(out.b),
        }
        out
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

// ─────────────────────────────────────────────────────────────────
// Per-group settings and the shared config
// ─────────────────────────────────────────────────────────────────

/// The paired per-group state: visibility flag plus display color.
///
/// Both fields exist together for every discovered group — the pairing is
/// structural, a group can never have one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSettings {
    pub show: bool,
    pub color: Rgb,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            show: false,
            color: Rgb::DEFAULT,
        }
    }
}

/// The shared mutable configuration object behind every panel control.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    /// Top-level debug view selector.
    pub debug_type: DebugType,
    groups: BTreeMap<GroupId, GroupSettings>,
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the paired show/color entry for a newly discovered group.
    ///
    /// A single logical operation: both fields appear together. Idempotent —
    /// if the group is already present its current settings are returned
    /// unchanged.
    pub fn insert_group(&mut self, id: GroupId) -> GroupSettings {
        *self.groups.entry(id).or_default()
    }

    pub fn group(&self, id: &GroupId) -> Option<&GroupSettings> {
        self.groups.get(id)
    }

    pub fn contains(&self, id: &GroupId) -> bool {
        self.groups.contains_key(id)
    }

    pub fn show(&self, id: &GroupId) -> Option<bool> {
        self.groups.get(id).map(|g| g.show)
    }

    pub fn color(&self, id: &GroupId) -> Option<Rgb> {
        self.groups.get(id).map(|g| g.color)
    }

    /// Set the show flag. Returns `false` for an unknown group.
    pub fn set_show(&mut self, id: &GroupId, show: bool) -> bool {
        match self.groups.get_mut(id) {
            Some(g) => {
                g.show = show;
                true
            }
            None => false,
        }
    }

    /// Flip the show flag, returning the new value for a known group.
    pub fn toggle_show(&mut self, id: &GroupId) -> Option<bool> {
        self.groups.get_mut(id).map(|g| {
            g.show = !g.show;
            g.show
        })
    }

    /// Set the color. Returns `false` for an unknown group.
    pub fn set_color(&mut self, id: &GroupId, color: Rgb) -> bool {
        match self.groups.get_mut(id) {
            Some(g) => {
                g.color = color;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupId, &GroupSettings)> {
        self.groups.iter()
    }
}
