//! Hydration gate.
//!
//! DESIGN
//! ======
//! Every consumer of the panel state starts `Uninitialized` and renders a
//! fixed fallback until its first post-render effect resolves the real value.
//! The server render and the first client render therefore always match; the
//! resolved value is revealed one step later. The transition happens once per
//! mount and never goes back.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Per-component mount phase and panel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    /// Server render, or client render before the component became interactive.
    #[default]
    Uninitialized,
    /// Interactive; carries the resolved open state.
    Resolved(bool),
}

impl PanelPhase {
    /// True once the component has resolved its value.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The resolved value, if any.
    #[must_use]
    pub fn resolved(self) -> Option<bool> {
        match self {
            Self::Uninitialized => None,
            Self::Resolved(open) => Some(open),
        }
    }

    /// Value to render: the resolved value, or `fallback` before mounting.
    #[must_use]
    pub fn value_or(self, fallback: bool) -> bool {
        self.resolved().unwrap_or(fallback)
    }
}
