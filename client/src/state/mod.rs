//! Shared client-side state modules.

pub mod navigation;
