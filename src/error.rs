use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZError {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("unable to open file {} for writing: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid unit cell: {0}")]
    InvalidCell(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("structure could not be generated: {0}")]
    Substitution(String),
}
