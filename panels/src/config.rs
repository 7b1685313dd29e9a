//! Manager configuration.

use crate::geometry::Size;

/// Storage key holding the whole persisted layout.
pub const DEFAULT_STORAGE_KEY: &str = "floatingFragments.v1";

/// Offset in pixels of the first default-positioned panel.
pub const DEFAULT_STAGGER_BASE: f64 = 32.0;

/// Diagonal step in pixels between successive default-positioned panels.
pub const DEFAULT_STAGGER_STRIDE: f64 = 28.0;

/// Size reported for panels that were never sized or measured.
pub const DEFAULT_PANEL_SIZE: Size = Size { width: 420.0, height: 320.0 };

/// Tunables for a [`crate::manager::FragmentManager`].
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    pub storage_key: String,
    pub stagger_base: f64,
    pub stagger_stride: f64,
    pub default_size: Size,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            stagger_base: DEFAULT_STAGGER_BASE,
            stagger_stride: DEFAULT_STAGGER_STRIDE,
            default_size: DEFAULT_PANEL_SIZE,
        }
    }
}

impl ManagerConfig {
    /// Default top/left offset for the panel opened when `open_count` panels
    /// are already showing. Successive panels cascade diagonally.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stagger_offset(&self, open_count: usize) -> f64 {
        self.stagger_base + open_count as f64 * self.stagger_stride
    }
}
