use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    MissingAsset { name: String },
    Config { path: PathBuf, reason: String },
    InvalidSettings(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAsset { name } => write!(f, "missing image asset `{name}`"),
            Self::Config { path, reason } => {
                write!(f, "cannot load settings from {}: {reason}", path.display())
            }
            Self::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}

pub type Result<T> = std::result::Result<T, GameError>;
