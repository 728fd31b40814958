use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Sign-out failed: {0}")]
    SignOutFailed(String),

    #[error("Invalid shell configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
