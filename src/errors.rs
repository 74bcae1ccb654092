use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or reading the input stream
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open '{}': no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("cannot open '{}': permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
