//! Viewport classification.
//!
//! Only meaningful where a real viewport exists. Server rendering never calls
//! into this module; it renders the configured fallback instead.

use crate::consts::BREAKPOINT_PX;

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Default open state for a viewport `width_px` wide, at the standard breakpoint.
#[must_use]
pub fn default_open_for(width_px: f64) -> bool {
    default_open_at(width_px, BREAKPOINT_PX)
}

/// Default open state for `width_px` against an explicit `breakpoint_px`.
///
/// Non-finite widths classify as closed.
#[must_use]
pub fn default_open_at(width_px: f64, breakpoint_px: f64) -> bool {
    width_px.is_finite() && width_px >= breakpoint_px
}

/// Whether a viewport `width_px` wide is below `breakpoint_px`.
///
/// Non-finite widths are never narrow, so a bogus reading cannot force the
/// panel closed.
#[must_use]
pub fn is_narrow(width_px: f64, breakpoint_px: f64) -> bool {
    width_px.is_finite() && width_px < breakpoint_px
}
