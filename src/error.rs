use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Jira API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file at {path} is corrupt: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid Jira URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, JiraError>;
