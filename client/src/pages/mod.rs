//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are plain content; they never read or write the panel state.

pub mod courses;
pub mod home;
