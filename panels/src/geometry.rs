//! Panel geometry and the CSS pixel string codec.
//!
//! Persisted layouts store every length as a CSS string (`"42px"`), matching
//! what the browser reports for inline styles. Parsing is tolerant of a
//! missing suffix and surrounding whitespace.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Top-left corner of a panel, in CSS pixels from the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    #[must_use]
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Translate by a pointer delta (`dx` moves `left`, `dy` moves `top`).
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { top: self.top + dy, left: self.left + dx }
    }
}

/// Panel dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Format a length as a CSS pixel string. Integral values drop the fraction.
#[must_use]
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}px")
    } else {
        format!("{value}px")
    }
}

/// Parse a CSS pixel string such as `"42px"`, `"12.5px"` or `"7"`.
///
/// Returns `None` for empty, non-numeric, or non-finite input.
#[must_use]
pub fn parse_px(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    let value: f64 = number.parse().ok()?;
    value.is_finite().then_some(value)
}
