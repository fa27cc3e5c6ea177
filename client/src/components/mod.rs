//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app_sidebar` owns the navigation panel state and `content_frame` mirrors
//! it. They are deliberately unaware of each other and share no context.

pub mod app_sidebar;
pub mod content_frame;
