//! Wall-clock access that works both in the browser and natively.

/// Milliseconds since the Unix epoch.
///
/// `SystemTime` is unavailable on `wasm32-unknown-unknown`, so browser builds
/// read `Date.now()` instead.
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now().max(0.0) as u64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
