//! Shared constants for the panel crate.

// ── Persistence ─────────────────────────────────────────────────

/// Key of the persisted open/closed record.
pub const STORAGE_KEY: &str = "sidebarOpen";

/// Persisted value for an open panel.
pub const VALUE_OPEN: &str = "true";

/// Persisted value for a closed panel.
pub const VALUE_CLOSED: &str = "false";

// ── Notification ────────────────────────────────────────────────

/// Name of the same-tab custom event carrying `{ isOpen }`.
pub const CHANGE_EVENT: &str = "sidebarStateChange";

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width (px) at and above which the panel defaults to open.
pub const BREAKPOINT_PX: f64 = 1024.0;

/// Horizontal space (px) reserved beside the panel while it is open.
pub const PANEL_WIDTH_PX: f64 = 320.0;

// ── Input ───────────────────────────────────────────────────────

/// Letter toggled together with Ctrl.
pub const SHORTCUT_KEY: char = 'b';

/// Owner fallback before it becomes interactive (and on the server).
pub const OWNER_FALLBACK: bool = false;

/// Mirror fallback before it becomes interactive (and on the server).
///
/// Deliberately differs from [`OWNER_FALLBACK`]: reserving the full panel
/// width avoids a content shift on large screens, where open is common.
pub const MIRROR_FALLBACK: bool = true;
