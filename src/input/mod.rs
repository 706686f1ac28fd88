use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard has no text")]
    EmptyClipboard,
}

pub mod clipboard;
pub mod file;
