use crate::model::Resource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// The record targeted by an update does not exist.
    #[error("{} {id} not found. Leave the id empty to create a new one.", .resource.label())]
    NotFound { resource: Resource, id: String },

    /// A comment points at a post that is missing or was not given.
    #[error("{0}")]
    MissingReference(String),

    /// The server answered with a non-success status.
    #[error("{method} {path} rejected with status {status}")]
    Rejected {
        method: String,
        path: String,
        status: u16,
    },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification of a [`BoardError`], for callers deciding how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Aborted before writing: shown to the user, nothing changed.
    NotFound,
    MissingReference,
    /// The server refused a request.
    Rejected,
    /// Everything else: transport, decoding, local I/O.
    Failure,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::NotFound { .. } => ErrorKind::NotFound,
            BoardError::MissingReference(_) => ErrorKind::MissingReference,
            BoardError::Rejected { .. } => ErrorKind::Rejected,
            _ => ErrorKind::Failure,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.kind() == ErrorKind::Rejected
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
