use crate::errors::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::PathBuf;

/// Where the line stream comes from: a named file or standard input.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Opens the source for buffered reading. Open failures are mapped to
    /// the user-facing error kinds before any output is produced.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(BufReader::new(file))),
                Err(err) => Err(match err.kind() {
                    ErrorKind::NotFound => InputError::NotFound(path.clone()),
                    ErrorKind::PermissionDenied => InputError::PermissionDenied(path.clone()),
                    _ => InputError::Io(err),
                }),
            },
        }
    }
}
