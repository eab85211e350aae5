use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::model::{
    constants::{MAX_RANK_POINTS, MAX_STAR_POINTS},
    error::Error,
    structures::{grade::Grade, mode::Mode, rank_tier::RankTier, star_rating::StarRating}
};

/// Grade input as it arrives from the wire, before validation against a
/// mode's grade table.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawGrade {
    pub rank: Option<String>,
    pub stars: Option<f64>
}

impl RawGrade {
    pub fn rank(rank: &str) -> RawGrade {
        RawGrade {
            rank: Some(rank.to_string()),
            stars: None
        }
    }

    pub fn stars(stars: f64) -> RawGrade {
        RawGrade {
            rank: None,
            stars: Some(stars)
        }
    }
}

/// Point value and percentage derived from a grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub points: f64,
    pub percentage: f64
}

/// Scoring behavior for one leaderboard mode, selected once at
/// leaderboard construction. Both grade tables are fixed and total;
/// anything outside them is an invalid grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    Classic,
    Ffa
}

impl ScoringStrategy {
    pub fn for_mode(mode: Mode) -> ScoringStrategy {
        match mode {
            Mode::Classic => ScoringStrategy::Classic,
            Mode::Ffa => ScoringStrategy::Ffa
        }
    }

    fn max_points(self) -> f64 {
        match self {
            ScoringStrategy::Classic => MAX_RANK_POINTS,
            ScoringStrategy::Ffa => MAX_STAR_POINTS
        }
    }

    /// Validates loose input against the mode's grade table.
    pub fn parse_grade(self, raw: &RawGrade) -> Result<Grade, Error> {
        match self {
            ScoringStrategy::Classic => {
                let rank = raw
                    .rank
                    .as_deref()
                    .ok_or_else(|| Error::InvalidGrade("missing rank".to_string()))?;
                let tier = rank
                    .parse::<RankTier>()
                    .map_err(|_| Error::InvalidGrade(rank.to_string()))?;
                Ok(Grade::Tier(tier))
            }
            ScoringStrategy::Ffa => {
                let stars = raw
                    .stars
                    .ok_or_else(|| Error::InvalidGrade("missing star rating".to_string()))?;
                Ok(Grade::Stars(StarRating::try_from(stars)?))
            }
        }
    }

    /// Maps a grade to its point value and percentage of the maximum.
    /// A grade of the wrong kind for the strategy is invalid.
    pub fn score(self, grade: Grade) -> Result<Score, Error> {
        let points = match (self, grade) {
            (ScoringStrategy::Classic, Grade::Tier(tier)) => tier.points(),
            (ScoringStrategy::Ffa, Grade::Stars(rating)) => rating.points(),
            (_, grade) => return Err(Error::InvalidGrade(grade.to_string()))
        };

        Ok(Score {
            points,
            percentage: points / self.max_points() * 100.0
        })
    }

    /// Display strings for every grade the mode accepts, in ascending
    /// point order.
    pub fn grades(self) -> Vec<String> {
        match self {
            ScoringStrategy::Classic => RankTier::iter().map(|tier| tier.to_string()).collect(),
            ScoringStrategy::Ffa => StarRating::iter().map(|rating| rating.to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::model::{
        error::Error,
        scoring::{RawGrade, ScoringStrategy},
        structures::{grade::Grade, mode::Mode, rank_tier::RankTier, star_rating::StarRating}
    };

    #[test]
    fn test_strategy_for_mode() {
        assert_eq!(ScoringStrategy::for_mode(Mode::Classic), ScoringStrategy::Classic);
        assert_eq!(ScoringStrategy::for_mode(Mode::Ffa), ScoringStrategy::Ffa);
    }

    #[test]
    fn test_classic_score() {
        let score = ScoringStrategy::Classic.score(Grade::Tier(RankTier::SHigh)).unwrap();

        assert_eq!(score.points, 15.0);
        assert_abs_diff_eq!(score.percentage, 100.0);
    }

    #[test]
    fn test_classic_score_midtable() {
        let score = ScoringStrategy::Classic.score(Grade::Tier(RankTier::AMid)).unwrap();

        assert_eq!(score.points, 8.0);
        assert_abs_diff_eq!(score.percentage, 8.0 / 15.0 * 100.0);
    }

    #[test]
    fn test_ffa_score() {
        let score = ScoringStrategy::Ffa.score(Grade::Stars(StarRating::ThreeStars)).unwrap();

        assert_eq!(score.points, 9.0);
        assert_abs_diff_eq!(score.percentage, 60.0);
    }

    #[test]
    fn test_score_rejects_wrong_grade_kind() {
        let tier = Grade::Tier(RankTier::SHigh);
        let stars = Grade::Stars(StarRating::FiveStars);

        assert!(ScoringStrategy::Ffa.score(tier).is_err());
        assert!(ScoringStrategy::Classic.score(stars).is_err());
    }

    #[test]
    fn test_parse_classic_grade() {
        let grade = ScoringStrategy::Classic.parse_grade(&RawGrade::rank("A+ High")).unwrap();
        assert_eq!(grade, Grade::Tier(RankTier::APlusHigh));
    }

    #[test]
    fn test_parse_ffa_grade() {
        let grade = ScoringStrategy::Ffa.parse_grade(&RawGrade::stars(4.5)).unwrap();
        assert_eq!(grade, Grade::Stars(StarRating::FourAndAHalf));
    }

    #[test]
    fn test_parse_unknown_rank() {
        let result = ScoringStrategy::Classic.parse_grade(&RawGrade::rank("SS High"));
        assert_eq!(result, Err(Error::InvalidGrade("SS High".to_string())));
    }

    #[test]
    fn test_parse_missing_grade_field() {
        assert!(ScoringStrategy::Classic.parse_grade(&RawGrade::default()).is_err());
        assert!(ScoringStrategy::Ffa.parse_grade(&RawGrade::default()).is_err());
    }

    #[test]
    fn test_parse_ignores_other_modes_field() {
        // A classic board only looks at the rank field, so stray star
        // input does not make a grade valid
        let raw = RawGrade {
            rank: None,
            stars: Some(5.0)
        };
        assert!(ScoringStrategy::Classic.parse_grade(&raw).is_err());
    }

    #[test]
    fn test_grade_listing() {
        let classic = ScoringStrategy::Classic.grades();
        let ffa = ScoringStrategy::Ffa.grades();

        assert_eq!(classic.len(), 15);
        assert_eq!(classic.first().map(String::as_str), Some("B+ Low"));
        assert_eq!(classic.last().map(String::as_str), Some("S High"));

        assert_eq!(ffa.len(), 10);
        assert_eq!(ffa.first().map(String::as_str), Some("0.5"));
        assert_eq!(ffa.last().map(String::as_str), Some("5.0"));
    }
}
