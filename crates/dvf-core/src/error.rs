// crates/dvf-core/src/error.rs

use std::path::PathBuf;

use polars::prelude::DataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("source {path} is not readable: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema inference failed for {path}: {source}")]
    SchemaInference {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },

    #[error("column '{column}' missing from {relation} relation")]
    MissingColumn {
        relation: &'static str,
        column: String,
    },

    #[error("join key type mismatch: code_postal is {left} but codepostal is {right}")]
    JoinKeyTypeMismatch { left: DataType, right: DataType },

    #[error("destination {path} is not writable: {message}")]
    DestinationUnwritable { path: PathBuf, message: String },

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
