use thiserror::Error;

use crate::analysis::window::WindowKind;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No recent matches found for this player")]
    NoMatches,

    #[error("Not enough match history: the {0} window has no usable games")]
    EmptyWindow(WindowKind),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
