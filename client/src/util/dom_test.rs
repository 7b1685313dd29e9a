use super::*;

#[test]
fn normalize_slug_trims_and_rejects_blank() {
    assert_eq!(normalize_slug(Some(" intro.md ".to_owned())).as_deref(), Some("intro.md"));
    assert_eq!(normalize_slug(Some("   ".to_owned())), None);
    assert_eq!(normalize_slug(None), None);
}

#[test]
fn selectors_match_fragment_markup_conventions() {
    assert_eq!(RELATED_LINK_SELECTOR, "a.open-related[data-slug]");
    assert_eq!(CLOSE_CONTROL_SELECTOR, "button.close-fragment[data-action=\"close\"]");
    assert_eq!(FRAGMENT_TITLE_SELECTOR, ".note-fragment h2");
}
