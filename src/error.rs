use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while staging and deploying a stack
#[derive(Debug, Error)]
pub enum Error {
    /// The session could not build its clients
    #[error("failed to initialize AWS session: {0}")]
    Session(String),

    /// A parameter or tag file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template file does not exist on local disk
    #[error("{0} is not actually a file")]
    TemplateMissing(PathBuf),

    /// The template could not be decoded or has no `Parameters` section
    #[error("invalid template {path}: {message}")]
    Template { path: PathBuf, message: String },

    /// A parameter declared by the template has no value in the parameter file
    #[error("required parameter {0} not found in parameter file")]
    MissingParameter(String),

    #[error("failed to upload {path} to s3://{bucket}/{key}: {message}")]
    Upload {
        path: PathBuf,
        bucket: String,
        key: String,
        message: String,
    },

    #[error("failed to describe stack {stack}: {message}")]
    Describe { stack: String, message: String },

    /// The stack disappeared while waiting for it
    #[error("stack {0} does not exist")]
    StackNotFound(String),

    #[error("failed to create stack {stack}: {message}")]
    CreateStack { stack: String, message: String },

    #[error("failed to update stack {stack}: {message}")]
    UpdateStack { stack: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
