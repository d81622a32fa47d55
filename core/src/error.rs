use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stage '{stage}': cannot open {path} for writing: {source}")]
    OpenFile {
        stage: &'static str,
        path: PathBuf,
        source: csv::Error,
    },

    #[error("stage '{stage}': write failed: {source}")]
    Write {
        stage: &'static str,
        source: csv::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
