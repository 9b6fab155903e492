//! Tier Tally Core - achievement tier engine for game scorekeeping
//!
//! Converts a game's total score, its player count and the game type's
//! `(bad, good)` per-player calibration into a themed achievement tier,
//! and lists the total score each tier requires.
//!
//! ```
//! use tier_tally_core::config::{Difficulty, GameTypeConfig};
//! use tier_tally_core::theme::ThemeCatalog;
//!
//! let catan = GameTypeConfig::new("Catan", 100, 20).unwrap();
//! let animals = ThemeCatalog::shipped().theme(0).unwrap();
//!
//! let name = catan.tier_name(120, 2, Difficulty::Normal, animals).unwrap();
//! assert_eq!(name, "Average Alligators");
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod config;
pub mod error;
pub mod session;
pub mod theme;
pub mod tier;

#[cfg(feature = "python")]
mod bindings;

pub use crate::config::{Calibration, Difficulty, GameTypeConfig, GameTypeRegistry};
pub use crate::error::{Result, TierTallyError};
pub use crate::session::{Achievement, PlayedGame};
pub use crate::theme::{Theme, ThemeCatalog};
pub use crate::tier::{tier_index, tier_name, tier_thresholds, ThresholdBound, TierThreshold};
