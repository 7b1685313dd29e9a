use super::*;

const KEY: &str = "floatingFragments.v1";

fn snap(id: &str, slug: &str, collapsed: bool) -> PanelSnapshot {
    PanelSnapshot {
        id: id.to_owned(),
        slug: slug.to_owned(),
        top: Some("32px".to_owned()),
        left: Some("32px".to_owned()),
        width: Some("420px".to_owned()),
        height: Some("320px".to_owned()),
        collapsed,
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn rejecting_store_reports_write_error() {
    let mut store = MemoryStore::rejecting();
    assert!(matches!(store.set("k", "v"), Err(StoreError::Write(_))));
    assert_eq!(store.get("k"), None);
}

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StoreError::Write("quota".into()).to_string(), "storage write failed: quota");
}

// =============================================================
// LayoutRepository
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    let repo = LayoutRepository::new(MemoryStore::new(), KEY);
    assert!(repo.load().is_empty());
}

#[test]
fn load_malformed_payload_is_empty() {
    let repo = LayoutRepository::new(MemoryStore::new().with_entry(KEY, "{\"not\":\"a list\"}"), KEY);
    assert!(repo.load().is_empty());
}

#[test]
fn upsert_appends_then_replaces_by_id() {
    let mut repo = LayoutRepository::new(MemoryStore::new(), KEY);
    repo.upsert(snap("1", "a.md", false));
    repo.upsert(snap("2", "b.md", false));
    repo.upsert(snap("1", "a.md", true));

    let all = repo.load();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "1");
    assert!(all[0].collapsed);
    assert_eq!(all[1].id, "2");
}

#[test]
fn replace_all_drops_entries_not_in_open_set() {
    let mut repo = LayoutRepository::new(MemoryStore::new(), KEY);
    repo.upsert(snap("1", "a.md", false));
    repo.upsert(snap("2", "b.md", false));
    repo.replace_all(&[snap("2", "b.md", false)]);

    let ids: Vec<String> = repo.load().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn replace_all_with_nothing_stores_empty_list() {
    let mut repo = LayoutRepository::new(MemoryStore::new(), KEY);
    repo.upsert(snap("1", "a.md", false));
    repo.replace_all(&[]);
    assert_eq!(repo.store().get(KEY).as_deref(), Some("[]"));
}

#[test]
fn write_failures_are_swallowed() {
    let mut repo = LayoutRepository::new(MemoryStore::rejecting(), KEY);
    repo.upsert(snap("1", "a.md", false));
    repo.replace_all(&[snap("1", "a.md", false)]);
    assert!(repo.load().is_empty());
}

#[test]
fn repository_uses_its_own_key() {
    let mut repo = LayoutRepository::new(MemoryStore::new(), "other");
    repo.upsert(snap("1", "a.md", false));
    assert!(repo.store().get(KEY).is_none());
    assert!(repo.into_store().get("other").is_some());
}
