//! Game type configuration structures

use crate::config::Difficulty;
use crate::error::{Result, TierTallyError};
use crate::theme::Theme;
use crate::tier::{self, Thresholds};
use serde::{Deserialize, Serialize};

/// Per-player score calibration of a game type
///
/// `bad` and `good` are the two interior calibration points of the tier
/// scale. A `Calibration` can only be built with `good > bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalibration")]
pub struct Calibration {
    good: i32,
    bad: i32,
}

#[derive(Deserialize)]
struct RawCalibration {
    good: i32,
    bad: i32,
}

impl TryFrom<RawCalibration> for Calibration {
    type Error = TierTallyError;

    fn try_from(raw: RawCalibration) -> Result<Self> {
        Calibration::new(raw.good, raw.bad)
    }
}

impl Calibration {
    pub fn new(good: i32, bad: i32) -> Result<Self> {
        if good <= bad {
            return Err(TierTallyError::InvalidCalibration { good, bad });
        }
        Ok(Self { good, bad })
    }

    #[inline]
    pub fn good(&self) -> i32 {
        self.good
    }

    #[inline]
    pub fn bad(&self) -> i32 {
        self.bad
    }

    /// Width of the interior range, `good - bad`
    #[inline]
    pub fn span(&self) -> i64 {
        i64::from(self.good) - i64::from(self.bad)
    }

    /// Calibration adjusted for a difficulty preset
    ///
    /// Fails if scaling collapses the range so that `good <= bad`.
    pub fn scaled(&self, difficulty: Difficulty) -> Result<Self> {
        Self::new(difficulty.scale(self.good), difficulty.scale(self.bad))
    }
}

/// Game type configuration: display name plus score calibration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameTypeRecord", into = "GameTypeRecord")]
pub struct GameTypeConfig {
    name: String,
    calibration: Calibration,
}

/// Flat serialized form of a game type
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameTypeRecord {
    name: String,
    #[serde(alias = "goodScore")]
    good_score: i32,
    #[serde(alias = "badScore")]
    bad_score: i32,
}

impl TryFrom<GameTypeRecord> for GameTypeConfig {
    type Error = TierTallyError;

    fn try_from(record: GameTypeRecord) -> Result<Self> {
        GameTypeConfig::new(record.name, record.good_score, record.bad_score)
    }
}

impl From<GameTypeConfig> for GameTypeRecord {
    fn from(config: GameTypeConfig) -> Self {
        GameTypeRecord {
            name: config.name,
            good_score: config.calibration.good,
            bad_score: config.calibration.bad,
        }
    }
}

impl GameTypeConfig {
    pub fn new(name: impl Into<String>, good_score: i32, bad_score: i32) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            calibration: Calibration::new(good_score, bad_score)?,
        })
    }

    /// Replace name and scores in place
    ///
    /// The edit is all-or-nothing: on an invalid calibration the config is
    /// left untouched.
    pub fn edit(&mut self, name: impl Into<String>, good_score: i32, bad_score: i32) -> Result<()> {
        let calibration = Calibration::new(good_score, bad_score)?;
        self.name = name.into();
        self.calibration = calibration;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn good_score(&self) -> i32 {
        self.calibration.good
    }

    pub fn bad_score(&self) -> i32 {
        self.calibration.bad
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Tier index reached by `total_score` under `theme`
    pub fn tier_index(
        &self,
        total_score: i32,
        player_count: i32,
        difficulty: Difficulty,
        theme: &Theme,
    ) -> Result<usize> {
        let calibration = self.calibration.scaled(difficulty)?;
        tier::tier_index(total_score, player_count, &calibration, theme.tier_count())
    }

    pub fn tier_name<'a>(
        &self,
        total_score: i32,
        player_count: i32,
        difficulty: Difficulty,
        theme: &'a Theme,
    ) -> Result<&'a str> {
        let calibration = self.calibration.scaled(difficulty)?;
        tier::tier_name(total_score, player_count, &calibration, theme)
    }

    pub fn tier_thresholds(
        &self,
        player_count: i32,
        difficulty: Difficulty,
        theme: &Theme,
    ) -> Result<Thresholds> {
        let calibration = self.calibration.scaled(difficulty)?;
        tier::tier_thresholds(player_count, &calibration, theme)
    }
}
