use super::*;
use crate::panel::{PanelId, PanelIdAllocator};

fn snapshot(id: &str, slug: &str) -> PanelSnapshot {
    PanelSnapshot {
        id: id.to_owned(),
        slug: slug.to_owned(),
        top: Some("60px".to_owned()),
        left: Some("88px".to_owned()),
        width: Some("420px".to_owned()),
        height: Some("320px".to_owned()),
        collapsed: false,
    }
}

// =============================================================
// decode_layout
// =============================================================

#[test]
fn decode_reads_wire_format() {
    let raw = r#"[{"id":"17","slug":"intro.md","top":"42px","left":"50px","width":"300px","height":"200px","collapsed":true}]"#;
    let decoded = decode_layout(raw);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, "17");
    assert_eq!(decoded[0].slug, "intro.md");
    assert_eq!(decoded[0].position_or(Position::default()), Position::new(42.0, 50.0));
    assert_eq!(decoded[0].size(), Some(Size::new(300.0, 200.0)));
    assert!(decoded[0].collapsed);
}

#[test]
fn decode_object_payload_is_empty() {
    assert!(decode_layout(r#"{"slug":"intro.md"}"#).is_empty());
}

#[test]
fn decode_invalid_json_is_empty() {
    assert!(decode_layout("").is_empty());
    assert!(decode_layout("[{").is_empty());
    assert!(decode_layout("null").is_empty());
    assert!(decode_layout("\"intro.md\"").is_empty());
}

#[test]
fn decode_drops_entries_without_string_slug() {
    let raw = r#"[{"id":"1"},{"id":"2","slug":3},null,"x",{"id":"3","slug":"keep.md"}]"#;
    let decoded = decode_layout(raw);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].slug, "keep.md");
}

#[test]
fn decode_fills_missing_optional_fields() {
    let decoded = decode_layout(r#"[{"slug":"bare.md"}]"#);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, "");
    assert_eq!(decoded[0].position_or(Position::new(7.0, 9.0)), Position::new(7.0, 9.0));
    assert!(decoded[0].size().is_none());
    assert!(!decoded[0].collapsed);
}

#[test]
fn decode_accepts_numeric_id() {
    let decoded = decode_layout(r#"[{"id":17,"slug":"a.md","top":"10px","left":"20px"}]"#);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, "17");
    assert_eq!(decoded[0].slug, "a.md");
}

#[test]
fn decode_treats_non_bool_collapsed_as_expanded() {
    let decoded = decode_layout(r#"[{"id":"2","slug":"b.md","collapsed":null},{"id":"3","slug":"c.md","collapsed":"yes"}]"#);
    assert_eq!(decoded.len(), 2);
    assert!(!decoded[0].collapsed);
    assert!(!decoded[1].collapsed);
}

#[test]
fn decode_accepts_numeric_lengths() {
    let decoded = decode_layout(r#"[{"id":"3","slug":"c.md","top":42,"left":12.5,"width":300,"height":200}]"#);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].top.as_deref(), Some("42px"));
    assert_eq!(decoded[0].position_or(Position::default()), Position::new(42.0, 12.5));
    assert_eq!(decoded[0].size(), Some(Size::new(300.0, 200.0)));
}

#[test]
fn decode_ignores_badly_typed_fields_but_keeps_entry() {
    let decoded = decode_layout(r#"[{"id":true,"slug":"d.md","top":[1],"width":{"px":3},"height":"200px"}]"#);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].id, "");
    assert!(decoded[0].top.is_none());
    assert!(decoded[0].width.is_none());
    assert!(decoded[0].size().is_none());
}

#[test]
fn decode_keeps_stored_order() {
    let raw = r#"[{"slug":"b.md"},{"slug":"a.md"},{"slug":"c.md"}]"#;
    let slugs: Vec<String> = decode_layout(raw).into_iter().map(|s| s.slug).collect();
    assert_eq!(slugs, ["b.md", "a.md", "c.md"]);
}

// =============================================================
// encode_layout
// =============================================================

#[test]
fn encode_writes_pixel_strings_and_flags() {
    let raw = encode_layout(&[snapshot("5", "intro.md")]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "5");
    assert_eq!(value[0]["slug"], "intro.md");
    assert_eq!(value[0]["top"], "60px");
    assert_eq!(value[0]["left"], "88px");
    assert_eq!(value[0]["collapsed"], false);
}

#[test]
fn encode_empty_layout_is_empty_array() {
    assert_eq!(encode_layout(&[]).unwrap(), "[]");
}

// =============================================================
// PanelSnapshot
// =============================================================

#[test]
fn capture_uses_default_size_when_unmeasured() {
    let mut ids = PanelIdAllocator::seeded(9);
    let panel = FragmentPanel::new(ids.allocate(), "intro.md", Position::new(32.0, 40.0));
    let snap = PanelSnapshot::capture(&panel, Size::new(420.0, 320.0));
    assert_eq!(snap.id, PanelId(9).to_string());
    assert_eq!(snap.top.as_deref(), Some("32px"));
    assert_eq!(snap.left.as_deref(), Some("40px"));
    assert_eq!(snap.width.as_deref(), Some("420px"));
    assert_eq!(snap.height.as_deref(), Some("320px"));
    assert!(!snap.collapsed);
}

#[test]
fn position_falls_back_per_coordinate() {
    let mut snap = snapshot("1", "a.md");
    snap.left = Some("auto".to_owned());
    assert_eq!(snap.position_or(Position::new(32.0, 32.0)), Position::new(60.0, 32.0));

    snap.top = None;
    snap.left = Some("88px".to_owned());
    assert_eq!(snap.position_or(Position::new(32.0, 32.0)), Position::new(32.0, 88.0));
}
