use std::fmt;
use std::path::PathBuf;

/// Failure loading an external asset (mesh, texture, config).
///
/// Load failures are never fatal to the frame loop; callers log them and
/// continue with the affected slot empty.
#[derive(Debug)]
pub enum LoadError {
    FileNotFound(PathBuf),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            LoadError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}
