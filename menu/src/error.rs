//! Error types for the menu engine's collaborators

use thiserror::Error;

pub type ListResult<T> = Result<T, ListError>;

/// Directory listing failures. Recoverable: the engine leaves the entry list
/// empty and the context stays usable.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Cannot open directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

pub type PresetResult<T> = Result<T, PresetError>;

/// Shader preset failures. Soft: the engine falls back to the no-shader
/// state and logs, never propagates.
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Cannot read preset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preset {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Preset has {count} passes, maximum is {max}")]
    TooManyPasses { count: usize, max: usize },

    #[error("Video driver rejected shader {path}")]
    Rejected { path: String },
}
