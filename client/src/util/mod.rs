//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate presentation math from component wiring so the
//! server-rendered and first client-rendered markup can be tested natively.

pub mod layout;
