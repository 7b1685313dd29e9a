//! DOM conventions for fragment content and panel chrome.
//!
//! Fragment HTML arrives as an opaque string, so interactive elements inside
//! it are recognized by selector through event delegation rather than wired
//! one by one after each load. This keeps nested fragments (loaded later, or
//! inside panels opened from other panels) working with no extra setup.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use panels::geometry::parse_px;
#[cfg(feature = "csr")]
use panels::{HeaderTarget, Size};

/// Links inside a fragment that open another fragment in a new panel.
pub const RELATED_LINK_SELECTOR: &str = "a.open-related[data-slug]";

/// Control inside a fragment that closes its enclosing panel.
pub const CLOSE_CONTROL_SELECTOR: &str = "button.close-fragment[data-action=\"close\"]";

/// Page-level buttons that pop a fragment out into a panel.
pub const POP_BUTTON_SELECTOR: &str = ".pop-fragment-btn[data-slug]";

/// Heading that names a fragment.
pub const FRAGMENT_TITLE_SELECTOR: &str = ".note-fragment h2";

/// Class on `<body>` that suppresses text selection while dragging.
pub const NO_SELECT_CLASS: &str = "no-select";

/// Non-empty, trimmed `data-slug` value.
pub fn normalize_slug(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Slug of the related link containing `target`, if any.
#[cfg(feature = "csr")]
pub fn related_slug(target: &web_sys::Element) -> Option<String> {
    let link = target.closest(RELATED_LINK_SELECTOR).ok().flatten()?;
    normalize_slug(link.get_attribute("data-slug"))
}

/// Whether `target` sits inside a fragment close control.
#[cfg(feature = "csr")]
pub fn is_close_control(target: &web_sys::Element) -> bool {
    target.closest(CLOSE_CONTROL_SELECTOR).ok().flatten().is_some()
}

/// Slug of the pop-out button containing `target`, if any.
#[cfg(feature = "csr")]
pub fn pop_button_slug(target: &web_sys::Element) -> Option<String> {
    let button = target.closest(POP_BUTTON_SELECTOR).ok().flatten()?;
    normalize_slug(button.get_attribute("data-slug"))
}

/// Classify a header pointer-down: header buttons never start a drag.
#[cfg(feature = "csr")]
pub fn header_target(target: Option<&web_sys::Element>) -> HeaderTarget {
    match target.and_then(|t| t.closest("button").ok().flatten()) {
        Some(_) => HeaderTarget::ActionButton,
        None => HeaderTarget::Surface,
    }
}

/// Element an event was dispatched to.
#[cfg(feature = "csr")]
pub fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// Heading text of a fragment, parsed without attaching it to the page.
#[cfg(feature = "csr")]
pub fn fragment_title(html: &str) -> Option<String> {
    let parser = web_sys::DomParser::new().ok()?;
    let doc = parser.parse_from_string(html, web_sys::SupportedType::TextHtml).ok()?;
    let heading = doc.query_selector(FRAGMENT_TITLE_SELECTOR).ok().flatten()?;
    heading.text_content()
}

/// Toggle text-selection suppression on `<body>` for the duration of a drag.
#[cfg(feature = "csr")]
pub fn set_no_select(enabled: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled { classes.add_1(NO_SELECT_CLASS) } else { classes.remove_1(NO_SELECT_CLASS) };
    if result.is_err() {
        log::debug!("could not toggle {NO_SELECT_CLASS} on body");
    }
}

/// Size pinned in an element's inline style, as left by a native resize.
#[cfg(feature = "csr")]
pub fn inline_size(el: &web_sys::HtmlElement) -> Option<Size> {
    let style = el.style();
    let width = style.get_property_value("width").ok()?;
    let height = style.get_property_value("height").ok()?;
    Some(Size::new(parse_px(&width)?, parse_px(&height)?))
}

/// Rendered bounding box of an element.
#[cfg(feature = "csr")]
pub fn measured_size(el: &web_sys::Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}
