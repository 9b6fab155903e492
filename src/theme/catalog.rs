//! Theme catalog: named tier name tables, worst to best

use crate::error::{Result, TierTallyError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tier count the shipped themes use
pub const DEFAULT_TIER_COUNT: usize = 8;

/// Smallest tier count that leaves room for the two extreme tiers plus an
/// interior one
pub const MIN_TIER_COUNT: usize = 3;

/// A named set of tier labels, ordered worst to best
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTheme")]
pub struct Theme {
    name: String,
    tiers: Vec<String>,
}

#[derive(Deserialize)]
struct RawTheme {
    name: String,
    tiers: Vec<String>,
}

impl TryFrom<RawTheme> for Theme {
    type Error = TierTallyError;

    fn try_from(raw: RawTheme) -> Result<Self> {
        Theme::new(raw.name, raw.tiers)
    }
}

impl Theme {
    pub fn new<S: Into<String>>(name: impl Into<String>, tiers: impl IntoIterator<Item = S>) -> Result<Self> {
        let name = name.into();
        let tiers: Vec<String> = tiers.into_iter().map(Into::into).collect();
        if tiers.len() < MIN_TIER_COUNT {
            return Err(TierTallyError::InvalidTheme(format!(
                "theme {:?} has {} tiers, at least {} required",
                name,
                tiers.len(),
                MIN_TIER_COUNT
            )));
        }
        Ok(Self { name, tiers })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    /// Name of the tier at `index`
    pub fn tier_name(&self, index: usize) -> Result<&str> {
        self.tiers
            .get(index)
            .map(String::as_str)
            .ok_or(TierTallyError::TierIndexOutOfRange {
                index,
                len: self.tiers.len(),
            })
    }
}

/// Fixed table of themes, indexed by a caller-supplied theme index
///
/// Every theme in a catalog has the same tier count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct RawCatalog {
    themes: Vec<Theme>,
}

impl TryFrom<RawCatalog> for ThemeCatalog {
    type Error = TierTallyError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        ThemeCatalog::new(raw.themes)
    }
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        let first = themes
            .first()
            .ok_or_else(|| TierTallyError::InvalidTheme("catalog has no themes".to_string()))?;
        let tier_count = first.tier_count();

        if let Some(mismatch) = themes.iter().find(|t| t.tier_count() != tier_count) {
            return Err(TierTallyError::InvalidTheme(format!(
                "theme {:?} has {} tiers, expected {}",
                mismatch.name(),
                mismatch.tier_count(),
                tier_count
            )));
        }

        if tier_count != DEFAULT_TIER_COUNT {
            log::warn!(
                "theme catalog uses {} tiers; threshold listing assumes {}",
                tier_count,
                DEFAULT_TIER_COUNT
            );
        }
        log::debug!("loaded theme catalog with {} themes", themes.len());

        Ok(Self { themes })
    }

    /// Parse a catalog from JSON: `{"themes": [{"name": ..., "tiers": [...]}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in catalog
    pub fn shipped() -> &'static ThemeCatalog {
        &SHIPPED_CATALOG
    }

    pub fn theme(&self, index: usize) -> Result<&Theme> {
        self.themes.get(index).ok_or(TierTallyError::ThemeNotFound(index))
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Tier count shared by every theme
    pub fn tier_count(&self) -> usize {
        self.themes[0].tier_count()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        SHIPPED_CATALOG.clone()
    }
}

const SHIPPED_THEMES: [(&str, [&str; DEFAULT_TIER_COUNT]); 3] = [
    (
        "Animals",
        [
            "Cowardly Cows",
            "Lowly Lamas",
            "Dead Dodos",
            "Average Alligators",
            "Fragrant Fish",
            "Excellent Eggs",
            "Beautiful Bears",
            "Godly Goats",
        ],
    ),
    (
        "Mythical Creatures",
        [
            "Devious Dragons",
            "Beautiful Basilisks",
            "Crafty Chimeras",
            "Subversive Sirens",
            "Keen Krakens",
            "Venomous Vampires",
            "Menacing Minotaurs",
            "Wonderful Werewolves",
        ],
    ),
    (
        "Bikini Bottom",
        [
            "Placid Patricks",
            "Sluggish Squidwards",
            "Standard Sandies",
            "Lethargic Larrys",
            "Pitiful Plankton",
            "Menacing Mr. Krabs",
            "Marvelous Mermaid Man",
            "Super Spongebob",
        ],
    ),
];

static SHIPPED_CATALOG: Lazy<ThemeCatalog> = Lazy::new(|| ThemeCatalog {
    themes: SHIPPED_THEMES
        .iter()
        .map(|(name, tiers)| Theme {
            name: (*name).to_string(),
            tiers: tiers.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect(),
});
