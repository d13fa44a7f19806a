use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pxgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
