use std::{
    error::Error,
    fmt::Display,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use log::debug;

#[derive(Debug)]
pub enum InputError {
    FileNotFound(PathBuf),
    /// The file exists but couldn't be read as UTF-8 text.
    Unreadable(PathBuf, io::Error),
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::FileNotFound(_) => None,
            InputError::Unreadable(_, err) => Some(err),
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileNotFound(path) => {
                write!(f, "file '{}' does not exist.", path.display())
            }
            InputError::Unreadable(path, err) => {
                write!(f, "could not read file '{}': {}", path.display(), err)
            }
        }
    }
}

/// Reads the expression stored in the given file, with surrounding
/// whitespace trimmed.
pub fn read_expression(path: &Path) -> Result<String, InputError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            debug!("read {} bytes from {}", contents.len(), path.display());
            Ok(contents.trim().to_string())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(InputError::FileNotFound(path.to_path_buf()))
        }
        Err(err) => Err(InputError::Unreadable(path.to_path_buf(), err)),
    }
}
