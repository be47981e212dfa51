#![deny(clippy::all, clippy::pedantic)]

use blog_editor::config::LoadError;
use blog_editor::domain::EditorError;
use blog_editor::infra::error::InfraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] InfraError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error("post rejected: {0}")]
    Rejected(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
