//! Error types for the homework bot

/// Errors that can occur in the homework bot
#[derive(Debug, thiserror::Error)]
pub enum HomeworkBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Structural problems found while validating an API payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("not an object")]
    NotAnObject,

    #[error("missing homeworks key")]
    MissingHomeworks,

    #[error("homeworks not a list")]
    HomeworksNotAList,

    #[error("missing current_date")]
    MissingCurrentDate,

    #[error("current_date not an integer")]
    CurrentDateNotAnInteger,

    #[error("missing status")]
    MissingStatus,

    #[error("missing homework_name")]
    MissingHomeworkName,

    #[error("status not a string")]
    StatusNotAString,

    #[error("unknown status {0:?}")]
    UnknownStatus(String),

    #[error("homework_name not a string")]
    HomeworkNameNotAString,
}

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, HomeworkBotError>;
