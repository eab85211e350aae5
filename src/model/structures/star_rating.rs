use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::model::{constants::STAR_POINT_MULTIPLIER, error::Error};

/// FFA star rating, in half-star steps from 0.5 to 5.0. Conversion from
/// a raw float is exact-match only.
#[derive(Serialize, Deserialize, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(into = "f64", try_from = "f64")]
pub enum StarRating {
    HalfStar,
    OneStar,
    OneAndAHalf,
    TwoStars,
    TwoAndAHalf,
    ThreeStars,
    ThreeAndAHalf,
    FourStars,
    FourAndAHalf,
    FiveStars
}

impl StarRating {
    pub fn stars(self) -> f64 {
        match self {
            StarRating::HalfStar => 0.5,
            StarRating::OneStar => 1.0,
            StarRating::OneAndAHalf => 1.5,
            StarRating::TwoStars => 2.0,
            StarRating::TwoAndAHalf => 2.5,
            StarRating::ThreeStars => 3.0,
            StarRating::ThreeAndAHalf => 3.5,
            StarRating::FourStars => 4.0,
            StarRating::FourAndAHalf => 4.5,
            StarRating::FiveStars => 5.0
        }
    }

    pub fn points(self) -> f64 {
        self.stars() * STAR_POINT_MULTIPLIER
    }
}

impl From<StarRating> for f64 {
    fn from(rating: StarRating) -> f64 {
        rating.stars()
    }
}

impl TryFrom<f64> for StarRating {
    type Error = Error;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        // Half-star steps are exactly representable, so equality is safe here
        match v {
            x if x == 0.5 => Ok(StarRating::HalfStar),
            x if x == 1.0 => Ok(StarRating::OneStar),
            x if x == 1.5 => Ok(StarRating::OneAndAHalf),
            x if x == 2.0 => Ok(StarRating::TwoStars),
            x if x == 2.5 => Ok(StarRating::TwoAndAHalf),
            x if x == 3.0 => Ok(StarRating::ThreeStars),
            x if x == 3.5 => Ok(StarRating::ThreeAndAHalf),
            x if x == 4.0 => Ok(StarRating::FourStars),
            x if x == 4.5 => Ok(StarRating::FourAndAHalf),
            x if x == 5.0 => Ok(StarRating::FiveStars),
            _ => Err(Error::InvalidGrade(v.to_string()))
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.stars())
    }
}
