//! Keyboard shortcut matching.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Platform-independent snapshot of a keydown event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` as reported by the platform.
    pub key: String,
    pub ctrl: bool,
    /// Whether the event target accepts text (input, textarea, contenteditable).
    pub in_editable: bool,
}

impl KeyChord {
    /// Ctrl + `key`, outside any editable target.
    #[must_use]
    pub fn ctrl(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            ctrl: true,
            ..Self::default()
        }
    }

    /// Whether this chord is Ctrl + `letter` (case-insensitive) typed outside
    /// an editable target. Other held modifiers do not matter.
    #[must_use]
    pub fn is_toggle(&self, letter: char) -> bool {
        if !self.ctrl || self.in_editable {
            return false;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&letter),
            _ => false,
        }
    }
}

/// Result of offering a key chord to the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The shortcut toggled the panel; the caller must suppress the default action.
    Handled,
    /// Not ours; leave the event alone.
    Ignored,
}
