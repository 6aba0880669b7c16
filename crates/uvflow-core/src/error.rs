use thiserror::Error;

#[derive(Debug, Error)]
pub enum UvflowError {
    #[error("unknown intent '{0}'; valid: {valid}", valid = crate::types::Intent::valid_tags())]
    UnknownIntent(String),

    #[error("intent '{intent}' requires {what}")]
    MissingArgument { intent: String, what: String },

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("'{0}' not found on PATH: install it first (https://docs.astral.sh/uv/)")]
    ToolNotFound(String),

    #[error("command failed ({status}): {command}")]
    CommandFailed { command: String, status: String },

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UvflowError>;
