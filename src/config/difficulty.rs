//! Difficulty presets applied to a game type's calibration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty chosen for a played game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Multiplier applied to both calibration scores
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.25,
        }
    }

    /// Scale a per-player score, rounding half away from zero
    #[inline]
    pub fn scale(self, score: i32) -> i32 {
        match self {
            Difficulty::Normal => score,
            _ => (f64::from(score) * self.multiplier()).round() as i32,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "EASY" => Some(Difficulty::Easy),
            "NORMAL" => Some(Difficulty::Normal),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str(" Normal "), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_normal_is_identity() {
        for score in [-7, 0, 1, 33, 100] {
            assert_eq!(Difficulty::Normal.scale(score), score);
        }
    }

    #[test]
    fn test_scale_rounds_half_away_from_zero() {
        // 10 * 0.75 = 7.5, 10 * 1.25 = 12.5
        assert_eq!(Difficulty::Easy.scale(10), 8);
        assert_eq!(Difficulty::Hard.scale(10), 13);
        assert_eq!(Difficulty::Easy.scale(-10), -8);
        assert_eq!(Difficulty::Hard.scale(-10), -13);
    }

    #[test]
    fn test_display_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(&difficulty.to_string()), Some(difficulty));
        }
    }
}
