//! Class and style strings derived from the panel phase.
//!
//! DESIGN
//! ======
//! Components never format markup from browser state directly. They pass the
//! value produced by `PanelConfig::owner_open` / `reserved_width_px`, which
//! is a constant before mount, so SSR output and the first hydrated render
//! are byte-identical.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Class list for the sidebar `<aside>`.
pub fn sidebar_class(open: bool) -> &'static str {
    if open { "app-sidebar app-sidebar--open" } else { "app-sidebar" }
}

/// Inline style for the content frame, reserving `reserved_px` on the left.
pub fn content_style(reserved_px: f64) -> String {
    format!("padding-left: {reserved_px:.0}px;")
}

/// Rotation for a section chevron.
pub fn chevron_style(expanded: bool) -> &'static str {
    if expanded { "transform: rotate(0deg);" } else { "transform: rotate(-90deg);" }
}
