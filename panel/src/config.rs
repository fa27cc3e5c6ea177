//! Panel synchronization configuration.
//!
//! DESIGN
//! ======
//! The defaults reproduce the shipped behavior, including the owner/mirror
//! fallback asymmetry. Deployments that prefer a single pre-mount default
//! build their config with [`PanelConfig::unified`].

use crate::consts::{
    BREAKPOINT_PX, MIRROR_FALLBACK, OWNER_FALLBACK, PANEL_WIDTH_PX, SHORTCUT_KEY, STORAGE_KEY,
};

use crate::gate::PanelPhase;
use crate::viewport::default_open_at;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Tunables shared by [`crate::PanelOwner`] and [`crate::PanelMirror`].
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Persisted record key.
    pub storage_key: String,
    /// Width threshold separating default-open from default-closed.
    pub breakpoint_px: f64,
    /// Space the mirror reserves while the panel is open.
    pub panel_width_px: f64,
    /// Letter paired with Ctrl for the toggle shortcut.
    pub shortcut_key: char,
    /// Value the owner renders before it is mounted.
    pub owner_fallback: bool,
    /// Value the mirror renders before it is mounted.
    pub mirror_fallback: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            breakpoint_px: BREAKPOINT_PX,
            panel_width_px: PANEL_WIDTH_PX,
            shortcut_key: SHORTCUT_KEY,
            owner_fallback: OWNER_FALLBACK,
            mirror_fallback: MIRROR_FALLBACK,
        }
    }
}

impl PanelConfig {
    /// Default config with both pre-mount fallbacks set to `fallback`.
    #[must_use]
    pub fn unified(fallback: bool) -> Self {
        Self {
            owner_fallback: fallback,
            mirror_fallback: fallback,
            ..Self::default()
        }
    }

    /// Open state resolved on mount when storage holds no usable record.
    ///
    /// Owner and mirror share this default; the two fallbacks only differ
    /// before mount.
    #[must_use]
    pub fn resolved_default(&self, viewport_width: Option<f64>) -> bool {
        viewport_width.map_or(self.owner_fallback, |width| {
            default_open_at(width, self.breakpoint_px)
        })
    }

    /// Owner's rendered value for `phase`.
    #[must_use]
    pub fn owner_open(&self, phase: PanelPhase) -> bool {
        phase.value_or(self.owner_fallback)
    }

    /// Mirror's rendered value for `phase`.
    #[must_use]
    pub fn mirror_open(&self, phase: PanelPhase) -> bool {
        phase.value_or(self.mirror_fallback)
    }

    /// Horizontal space the mirror reserves at `phase`.
    #[must_use]
    pub fn reserved_width_px(&self, phase: PanelPhase) -> f64 {
        if self.mirror_open(phase) { self.panel_width_px } else { 0.0 }
    }
}
