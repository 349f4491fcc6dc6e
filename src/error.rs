//! Error types for each stage of a run.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("gave up after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<FetchError>,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fatal outcomes of a run. Each maps to its own process exit code.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("Failed to fetch app list: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to write CSV: {0}")]
    Write(#[from] ExportError),
}

impl PipelineError {
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Fetch(_) => 2,
            PipelineError::Write(_) => 3,
        }
    }
}
