// Scoring constants
pub const MAX_RANK_POINTS: f64 = 15.0;
pub const MAX_STAR_POINTS: f64 = 15.0;
// Each half star is worth 1.5 points, so a full star is worth 3
pub const STAR_POINT_MULTIPLIER: f64 = 3.0;
