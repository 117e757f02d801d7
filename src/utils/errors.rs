use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteminError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSS minify error in {path}: {message}")]
    Css { path: String, message: String },

    #[error("HTML minify error in {path}: {message}")]
    Html { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

impl SiteminError {
    /// Create a CSS error tagged with the offending file
    pub fn css(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Css {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create an HTML error tagged with the offending file
    pub fn html(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Html {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn config(message: String) -> Self {
        Self::Config(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteminError>;

impl From<anyhow::Error> for SiteminError {
    fn from(err: anyhow::Error) -> Self {
        SiteminError::config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for SiteminError {
    fn from(err: tokio::task::JoinError) -> Self {
        SiteminError::Worker(format!("task join failed: {}", err))
    }
}
