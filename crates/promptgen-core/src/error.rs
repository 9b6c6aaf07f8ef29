use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptgenError {
    #[error("no command files found at {}", .0.display())]
    NoCommandFiles(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromptgenError>;
