use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorrupterError>;

#[derive(Error, Debug)]
pub enum CorrupterError {
    #[error("file \"{}\" not found.", .0.display())]
    NotFound(PathBuf),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
