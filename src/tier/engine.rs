//! Achievement tier classification
//!
//! A per-player score below the calibration's bad score lands in tier 0,
//! one above the good score in the top tier. Everything in between is
//! linearly rescaled from `[bad, good]` onto the interior tiers
//! `[1, tier_count - 2]` and floored.

use crate::config::Calibration;
use crate::error::{Result, TierTallyError};
use crate::theme::{Theme, MIN_TIER_COUNT};

use super::{ThresholdBound, TierThreshold, Thresholds};

/// Number of intervals the threshold listing splits `[bad, good]` into.
///
/// Fixed regardless of tier count; it matches the interior map only for
/// 8-tier themes.
pub const THRESHOLD_INTERVALS: f64 = 5.0;

/// Integer (truncating) per-player average
#[inline]
pub fn per_player_score(total_score: i32, player_count: i32) -> Result<i32> {
    if player_count <= 0 {
        return Err(TierTallyError::InvalidPlayerCount(player_count));
    }
    Ok(total_score / player_count)
}

/// Map `val` from `[old_min, old_max]` onto `[new_min, new_max]`, flooring
/// toward negative infinity.
///
/// `old_max` must be greater than `old_min`. The product is formed before
/// the division so the floor is exact at range boundaries.
#[inline]
pub fn map_range(val: i64, old_min: i64, old_max: i64, new_min: i64, new_max: i64) -> i64 {
    let shifted = ((new_max - new_min) * (val - old_min)) as f64 / (old_max - old_min) as f64;
    new_min + shifted.floor() as i64
}

/// Tier index for a total score, in `[0, tier_count - 1]`
pub fn tier_index(
    total_score: i32,
    player_count: i32,
    calibration: &Calibration,
    tier_count: usize,
) -> Result<usize> {
    if tier_count < MIN_TIER_COUNT {
        return Err(TierTallyError::InvalidTheme(format!(
            "tier count {} is below the minimum of {}",
            tier_count, MIN_TIER_COUNT
        )));
    }
    let per_player = per_player_score(total_score, player_count)?;

    if per_player < calibration.bad() {
        return Ok(0);
    }
    if per_player > calibration.good() {
        return Ok(tier_count - 1);
    }

    let index = map_range(
        i64::from(per_player),
        i64::from(calibration.bad()),
        i64::from(calibration.good()),
        1,
        tier_count as i64 - 2,
    );
    Ok(index as usize)
}

/// Themed name of the tier a total score reaches
pub fn tier_name<'a>(
    total_score: i32,
    player_count: i32,
    calibration: &Calibration,
    theme: &'a Theme,
) -> Result<&'a str> {
    let index = tier_index(total_score, player_count, calibration, theme.tier_count())?;
    theme.tier_name(index)
}

/// Minimum total score for every tier of `theme`, worst first
///
/// Interior tier `i` needs a per-player score of
/// `ceil((i - 1) * (good - bad) / 5 + bad)`; tier 1 and the second-best tier
/// are pinned to the bad and good scores.
pub fn tier_thresholds(player_count: i32, calibration: &Calibration, theme: &Theme) -> Result<Thresholds> {
    if player_count <= 0 {
        return Err(TierTallyError::InvalidPlayerCount(player_count));
    }
    let players = i64::from(player_count);
    let bad = i64::from(calibration.bad());
    let good = i64::from(calibration.good());
    let difference = calibration.span() as f64 / THRESHOLD_INTERVALS;
    let last = theme.tier_count() - 1;

    let mut thresholds = Thresholds::new();
    for (index, name) in theme.tiers().iter().enumerate() {
        let bound = if index == 0 {
            ThresholdBound::Below(bad * players)
        } else if index == last {
            ThresholdBound::Above(good * players)
        } else if index == 1 {
            ThresholdBound::AtLeast(bad * players)
        } else if index == last - 1 {
            ThresholdBound::AtLeast(good * players)
        } else {
            let min_per_player = ((index - 1) as f64 * difference + bad as f64).ceil() as i64;
            ThresholdBound::AtLeast(min_per_player * players)
        };
        thresholds.push(TierThreshold {
            index,
            name: name.clone(),
            bound,
        });
    }
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    fn calibration() -> Calibration {
        Calibration::new(100, 20).unwrap()
    }

    fn animals() -> &'static Theme {
        ThemeCatalog::shipped().theme(0).unwrap()
    }

    #[test]
    fn test_below_bad_is_worst_tier() {
        // 20 / 2 = 10 < 20
        assert_eq!(tier_index(20, 2, &calibration(), 8).unwrap(), 0);
        assert_eq!(tier_index(-500, 3, &calibration(), 8).unwrap(), 0);
    }

    #[test]
    fn test_above_good_is_best_tier() {
        // 240 / 2 = 120 > 100
        assert_eq!(tier_index(240, 2, &calibration(), 8).unwrap(), 7);
    }

    #[test]
    fn test_interior_rescale() {
        // 120 / 2 = 60, 1 + floor(5 * 40 / 80) = 3
        assert_eq!(tier_index(120, 2, &calibration(), 8).unwrap(), 3);
    }

    #[test]
    fn test_calibration_boundaries() {
        assert_eq!(tier_index(40, 2, &calibration(), 8).unwrap(), 1);
        assert_eq!(tier_index(200, 2, &calibration(), 8).unwrap(), 6);
        // 201 / 2 truncates to 100
        assert_eq!(tier_index(201, 2, &calibration(), 8).unwrap(), 6);
        assert_eq!(tier_index(202, 2, &calibration(), 8).unwrap(), 7);
    }

    #[test]
    fn test_good_boundary_with_awkward_span() {
        // 5.0 / 77.0 * 77.0 falls just short of 5.0 in double precision
        let calibration = Calibration::new(77, 0).unwrap();
        assert_eq!(tier_index(77, 1, &calibration, 8).unwrap(), 6);
    }

    #[test]
    fn test_per_player_truncates_toward_zero() {
        assert_eq!(per_player_score(7, 2).unwrap(), 3);
        assert_eq!(per_player_score(-7, 2).unwrap(), -3);

        // -39 / 2 = -19, which is not below a bad score of -19
        let calibration = Calibration::new(10, -19).unwrap();
        assert_eq!(tier_index(-39, 2, &calibration, 8).unwrap(), 1);
    }

    #[test]
    fn test_invalid_player_count() {
        assert_eq!(
            tier_index(10, 0, &calibration(), 8).unwrap_err(),
            TierTallyError::InvalidPlayerCount(0)
        );
        assert_eq!(
            tier_thresholds(-1, &calibration(), animals()).unwrap_err(),
            TierTallyError::InvalidPlayerCount(-1)
        );
    }

    #[test]
    fn test_tier_count_too_small() {
        assert!(matches!(
            tier_index(10, 1, &calibration(), 2),
            Err(TierTallyError::InvalidTheme(_))
        ));
    }

    #[test]
    fn test_map_range_floors_toward_negative_infinity() {
        assert_eq!(map_range(10, 0, 100, 0, 10), 1);
        assert_eq!(map_range(19, 0, 100, 0, 10), 1);
        assert_eq!(map_range(-1, 0, 100, 0, 10), -1);
    }

    #[test]
    fn test_tier_name() {
        let theme = animals();
        assert_eq!(tier_name(20, 2, &calibration(), theme).unwrap(), "Cowardly Cows");
        assert_eq!(tier_name(120, 2, &calibration(), theme).unwrap(), "Average Alligators");
        assert_eq!(tier_name(240, 2, &calibration(), theme).unwrap(), "Godly Goats");
    }

    #[test]
    fn test_thresholds_for_eight_tiers() {
        let listing: Vec<String> = tier_thresholds(2, &calibration(), animals())
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            listing,
            vec![
                "Cowardly Cows <40",
                "Lowly Lamas 40",
                "Dead Dodos 72",
                "Average Alligators 104",
                "Fragrant Fish 136",
                "Excellent Eggs 168",
                "Beautiful Bears 200",
                "Godly Goats >200",
            ]
        );
    }

    #[test]
    fn test_thresholds_round_up_fractional_steps() {
        // difference = 7 / 5 = 1.4: ceil(1.4) = 2, ceil(2.8) = 3, ceil(4.2) = 5, ceil(5.6) = 6
        let calibration = Calibration::new(7, 0).unwrap();
        let totals: Vec<i64> = tier_thresholds(3, &calibration, animals())
            .unwrap()
            .iter()
            .map(|t| t.bound.total())
            .collect();
        assert_eq!(totals, vec![0, 0, 6, 9, 15, 18, 21, 21]);
    }

    #[test]
    fn test_thresholds_keep_fixed_divisor_for_other_tier_counts() {
        // With 6 tiers the interior map spans [1, 4] but the listing still
        // steps by (good - bad) / 5.
        let theme = Theme::new("Six", ["a", "b", "c", "d", "e", "f"]).unwrap();
        let thresholds = tier_thresholds(1, &calibration(), &theme).unwrap();
        let totals: Vec<i64> = thresholds.iter().map(|t| t.bound.total()).collect();
        assert_eq!(totals, vec![20, 20, 36, 52, 100, 100]);

        // 36 per player maps to 1 + floor(3 * 16 / 80) = 1, not tier 2
        assert_eq!(tier_index(36, 1, &calibration(), 6).unwrap(), 1);
    }

    #[test]
    fn test_thresholds_three_tier_theme() {
        let theme = Theme::new("Three", ["Low", "Mid", "High"]).unwrap();
        let listing: Vec<String> = tier_thresholds(1, &calibration(), &theme)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listing, vec!["Low <20", "Mid 20", "High >100"]);
        assert_eq!(tier_index(100, 1, &calibration(), 3).unwrap(), 1);
    }
}
