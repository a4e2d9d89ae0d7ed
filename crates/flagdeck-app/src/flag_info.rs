//! Flag-info view model.
//!
//! Built once from the full stats response after a successful panel
//! build (also for an empty mapping). Usage data stays opaque to the
//! panel core; this view only prepares a display row per group.

use flagdeck_client::GroupMap;
use flagdeck_core::{normalize, GroupId};

/// Maximum length of a usage preview before truncation.
const PREVIEW_MAX_CHARS: usize = 60;

/// One display row per flag group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagInfoRow {
    pub label: String,
    pub id: GroupId,
    /// Compact preview of the group's usage payload.
    pub summary: String,
}

/// Usage overview rendered beside the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagInfoView {
    pub rows: Vec<FlagInfoRow>,
}

impl FlagInfoView {
    /// Build the view from the full response mapping.
    pub fn from_response(groups: &GroupMap) -> Self {
        let rows = groups
            .iter()
            .map(|(raw_key, usage)| {
                let name = normalize(raw_key);
                FlagInfoRow {
                    label: name.label,
                    id: name.id,
                    summary: preview(usage),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Compact single-line preview of an opaque usage payload.
fn preview(value: &serde_json::Value) -> String {
    let text = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.chars().count() > PREVIEW_MAX_CHARS {
        let truncated: String = text.chars().take(PREVIEW_MAX_CHARS - 1).collect();
        format!("{truncated}…")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_map(body: &str) -> GroupMap {
        match serde_json::from_str::<serde_json::Value>(body).unwrap() {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_from_response_builds_row_per_group() {
        let groups = group_map(r#"{"cpu_limit":{"count":3},"io_flag":"hot"}"#);
        let view = FlagInfoView::from_response(&groups);

        assert_eq!(view.len(), 2);
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert!(labels.contains(&"Cpu Limit"));
        assert!(labels.contains(&"Io Flag"));
    }

    #[test]
    fn test_from_response_empty_mapping() {
        let view = FlagInfoView::from_response(&group_map("{}"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_string_usage_is_shown_verbatim() {
        let groups = group_map(r#"{"walk":"12 edges"}"#);
        let view = FlagInfoView::from_response(&groups);
        assert_eq!(view.rows[0].summary, "12 edges");
    }

    #[test]
    fn test_long_usage_is_truncated() {
        let long = "x".repeat(200);
        let groups = group_map(&format!(r#"{{"walk":"{long}"}}"#));
        let view = FlagInfoView::from_response(&groups);

        assert!(view.rows[0].summary.chars().count() <= PREVIEW_MAX_CHARS);
        assert!(view.rows[0].summary.ends_with('…'));
    }

    #[test]
    fn test_structured_usage_is_compact_json() {
        let groups = group_map(r#"{"bike":{"count":7}}"#);
        let view = FlagInfoView::from_response(&groups);
        assert_eq!(view.rows[0].summary, r#"{"count":7}"#);
    }
}
