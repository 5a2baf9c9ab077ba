//! Command-line presentation: renders controller snapshots and forwards user
//! intents into the synchronization core.

pub mod blogs;
mod gate;
mod io;
mod print;
pub mod projects;

use thiserror::Error;

use crate::application::editor::{DetailEditor, EditorError};
use crate::application::transport::ClientError;
use crate::config::LoadError;
use crate::domain::resource::Resource;
use crate::infra::error::InfraError;

pub use gate::{AssumeYes, StdinGate};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{0}")]
    Editor(EditorError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<EditorError> for CliError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Client(client) => Self::Client(client),
            other => Self::Editor(other),
        }
    }
}

/// Surface whatever made a submit stay on the editor as the command error.
fn save_failure<R: Resource>(editor: &DetailEditor<R>) -> CliError {
    editor
        .error()
        .cloned()
        .map(CliError::from)
        .unwrap_or_else(|| CliError::InvalidInput("save refused".into()))
}
