use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Classic rank tier. The discriminant is the tier's point value, so the
/// point table is the enum itself.
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RankTier {
    #[serde(rename = "B+ Low")]
    #[strum(serialize = "B+ Low")]
    BPlusLow = 1,
    #[serde(rename = "B+ Mid")]
    #[strum(serialize = "B+ Mid")]
    BPlusMid = 2,
    #[serde(rename = "B+ High")]
    #[strum(serialize = "B+ High")]
    BPlusHigh = 3,
    #[serde(rename = "A- Low")]
    #[strum(serialize = "A- Low")]
    AMinusLow = 4,
    #[serde(rename = "A- Mid")]
    #[strum(serialize = "A- Mid")]
    AMinusMid = 5,
    #[serde(rename = "A- High")]
    #[strum(serialize = "A- High")]
    AMinusHigh = 6,
    #[serde(rename = "A Low")]
    #[strum(serialize = "A Low")]
    ALow = 7,
    #[serde(rename = "A Mid")]
    #[strum(serialize = "A Mid")]
    AMid = 8,
    #[serde(rename = "A High")]
    #[strum(serialize = "A High")]
    AHigh = 9,
    #[serde(rename = "A+ Low")]
    #[strum(serialize = "A+ Low")]
    APlusLow = 10,
    #[serde(rename = "A+ Mid")]
    #[strum(serialize = "A+ Mid")]
    APlusMid = 11,
    #[serde(rename = "A+ High")]
    #[strum(serialize = "A+ High")]
    APlusHigh = 12,
    #[serde(rename = "S Low")]
    #[strum(serialize = "S Low")]
    SLow = 13,
    #[serde(rename = "S Mid")]
    #[strum(serialize = "S Mid")]
    SMid = 14,
    #[serde(rename = "S High")]
    #[strum(serialize = "S High")]
    SHigh = 15
}

impl RankTier {
    pub fn points(self) -> f64 {
        self as u8 as f64
    }
}
