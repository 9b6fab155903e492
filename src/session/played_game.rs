//! Played game record and its achievement

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{Difficulty, GameTypeConfig};
use crate::error::{Result, TierTallyError};
use crate::theme::Theme;

/// Per-player scores; most sessions seat eight or fewer
pub type PlayerScores = SmallVec<[i32; 8]>;

/// Achievement reached by a played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub index: usize,
    pub name: String,
    pub total_score: i32,
}

/// One recorded session of a game type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedGame {
    pub game_type: String,
    pub player_scores: PlayerScores,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl PlayedGame {
    pub fn new(
        game_type: impl Into<String>,
        player_scores: impl IntoIterator<Item = i32>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            game_type: game_type.into(),
            player_scores: player_scores.into_iter().collect(),
            difficulty,
        }
    }

    /// Sum of every player's score, saturating at the `i32` bounds
    pub fn total_score(&self) -> i32 {
        self.player_scores
            .iter()
            .fold(0i32, |total, score| total.saturating_add(*score))
    }

    pub fn player_count(&self) -> i32 {
        self.player_scores.len() as i32
    }

    /// Replace the recorded scores and difficulty
    pub fn edit(&mut self, player_scores: impl IntoIterator<Item = i32>, difficulty: Difficulty) {
        self.player_scores = player_scores.into_iter().collect();
        self.difficulty = difficulty;
    }

    /// Compute the achievement against the game type's current calibration
    pub fn evaluate(&self, config: &GameTypeConfig, theme: &Theme) -> Result<Achievement> {
        if self.player_scores.is_empty() {
            return Err(TierTallyError::InvalidPlayerCount(0));
        }
        let total_score = self.total_score();
        let player_count = self.player_count();

        let index = config.tier_index(total_score, player_count, self.difficulty, theme)?;
        let name = theme.tier_name(index)?.to_string();

        Ok(Achievement {
            index,
            name,
            total_score,
        })
    }
}
