pub mod constants;
pub mod error;
pub mod leaderboard;
pub mod scoring;
pub mod structures;

pub use error::Error;
pub use leaderboard::{ImportEntry, Leaderboard};
pub use scoring::{RawGrade, Score, ScoringStrategy};
