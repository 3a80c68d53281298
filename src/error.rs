use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while reading or writing the JSON config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while running the external driver executable.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("driver executable `{0}` not found")]
    Launch(String),

    #[error("driver exited with {}: {stderr}", .code.map_or("a signal".to_string(), |c| format!("code {c}")))]
    Execution { code: Option<i32>, stderr: String },

    #[error("{0}")]
    Unexpected(String),
}
