use thiserror::Error;

/// Every reason an operation can be refused, as one tagged enum so callers
/// (transport, CLI) can branch without string matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("judge not found")]
    JudgeNotFound,

    #[error("performer not found")]
    PerformerNotFound,

    #[error("current performer not set")]
    NoActivePerformer,

    #[error("scores already submitted for this performer by this judge")]
    DuplicateSubmission,

    #[error("all scores must be provided")]
    MissingScores,

    #[error("scores must be integers")]
    NonIntegerScore,

    #[error("scores must be between 1 and 5")]
    ScoreOutOfRange,

    #[error("invalid email or password")]
    Unauthorized,

    #[error("storage failure: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Storage,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidInput(_)
            | CoreError::NoActivePerformer
            | CoreError::MissingScores
            | CoreError::NonIntegerScore
            | CoreError::ScoreOutOfRange => ErrorKind::Validation,
            CoreError::JudgeNotFound | CoreError::PerformerNotFound => ErrorKind::NotFound,
            CoreError::DuplicateSubmission => ErrorKind::Conflict,
            CoreError::Unauthorized => ErrorKind::Unauthorized,
            CoreError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(e: rusqlite::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}
