//! Achievement tier engine
//!
//! Pure functions from `(total score, player count, calibration, theme)` to
//! a tier index, a tier name and the per-tier score requirements. Nothing
//! is cached; every call recomputes from its arguments.

mod engine;
mod threshold;


pub use engine::*;
pub use threshold::*;
