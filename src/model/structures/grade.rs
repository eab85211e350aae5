use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::structures::{rank_tier::RankTier, star_rating::StarRating};

/// Grade held by a player record. Classic boards grade by rank tier,
/// FFA boards by star rating. Serializes untagged: a tier as its display
/// string, a star rating as a bare number.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Grade {
    Stars(StarRating),
    Tier(RankTier)
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Stars(rating) => write!(f, "{rating}"),
            Grade::Tier(tier) => write!(f, "{tier}")
        }
    }
}
