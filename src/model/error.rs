use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid grade: {0}")]
    InvalidGrade(String),

    #[error("player not found: {0}")]
    PlayerNotFound(String)
}
