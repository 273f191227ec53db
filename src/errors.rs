use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidAction(String),
    StaleReference,
    NoMatch,
    MissingRecipientAtDelivery,
    FileReaderError,
    InvalidConfiguration(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidAction(reason) => write!(f, "{}", reason),
            GameError::StaleReference => write!(f, "Timer fired for something that is gone"),
            GameError::NoMatch => write!(f, "Those ingredients are not on the menu"),
            GameError::MissingRecipientAtDelivery => write!(f, "Nobody waiting wanted that dish"),
            GameError::FileReaderError => write!(f, "Could not read the file"),
            GameError::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(_: std::io::Error) -> Self {
        GameError::FileReaderError
    }
}

impl From<serde_json::Error> for GameError {
    fn from(error: serde_json::Error) -> Self {
        GameError::InvalidConfiguration(error.to_string())
    }
}
