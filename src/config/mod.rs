//! Configuration module for game type data structures
//!
//! A game type carries a display name and a `(bad, good)` per-player score
//! calibration. Calibrations are validated on every construction path,
//! including deserialization, so the tier engine never sees `good <= bad`.

mod difficulty;
mod game_type;
mod registry;

pub use difficulty::*;
pub use game_type::*;
pub use registry::*;
