//! Persisted layout records and their JSON codec.
//!
//! The whole layout is one JSON array stored under a single key. Decoding is
//! deliberately forgiving: anything that is not an array decodes to an empty
//! layout, entries without a string `slug` are dropped, and every other field
//! is read independently so one bad value never costs the whole entry.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::{Position, Size, format_px, parse_px};
use crate::panel::FragmentPanel;

/// One saved panel. Lengths are CSS pixel strings (`"42px"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    #[serde(default)]
    pub id: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default)]
    pub collapsed: bool,
}

impl PanelSnapshot {
    /// Capture a live panel, falling back to `default_size` when it has
    /// neither an explicit nor a measured size.
    #[must_use]
    pub fn capture(panel: &FragmentPanel, default_size: Size) -> Self {
        let size = panel.effective_size(default_size);
        Self {
            id: panel.id.to_string(),
            slug: panel.slug.clone(),
            top: Some(format_px(panel.position.top)),
            left: Some(format_px(panel.position.left)),
            width: Some(format_px(size.width)),
            height: Some(format_px(size.height)),
            collapsed: panel.collapsed,
        }
    }

    /// Saved position. Each coordinate that is missing or unparsable falls
    /// back to the matching coordinate of `fallback`.
    #[must_use]
    pub fn position_or(&self, fallback: Position) -> Position {
        let top = self.top.as_deref().and_then(parse_px).unwrap_or(fallback.top);
        let left = self.left.as_deref().and_then(parse_px).unwrap_or(fallback.left);
        Position::new(top, left)
    }

    /// Saved size, when both dimensions parse.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        let width = self.width.as_deref().and_then(parse_px)?;
        let height = self.height.as_deref().and_then(parse_px)?;
        Some(Size::new(width, height))
    }
}

/// Decode a stored layout. Never fails; malformed input yields fewer entries.
#[must_use]
pub fn decode_layout(raw: &str) -> Vec<PanelSnapshot> {
    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    entries.iter().filter_map(snapshot_from_value).collect()
}

fn snapshot_from_value(entry: &Value) -> Option<PanelSnapshot> {
    let slug = entry.get("slug")?.as_str()?.to_owned();
    Some(PanelSnapshot {
        id: entry.get("id").and_then(id_field).unwrap_or_default(),
        slug,
        top: entry.get("top").and_then(length_field),
        left: entry.get("left").and_then(length_field),
        width: entry.get("width").and_then(length_field),
        height: entry.get("height").and_then(length_field),
        collapsed: entry.get("collapsed").and_then(Value::as_bool).unwrap_or(false),
    })
}

/// Ids are written as strings but older layouts may hold numbers.
fn id_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A length is a CSS string (`"42px"`) or a bare pixel number.
fn length_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(format_px),
        _ => None,
    }
}

/// Encode a layout for storage.
///
/// # Errors
///
/// Returns the serializer error; callers treat it as a skipped save.
pub fn encode_layout(snapshots: &[PanelSnapshot]) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshots)
}
