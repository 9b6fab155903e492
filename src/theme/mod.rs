//! Achievement themes
//!
//! The active theme is always passed in by the caller; nothing in this crate
//! tracks a "current" theme.

mod catalog;

pub use catalog::*;
