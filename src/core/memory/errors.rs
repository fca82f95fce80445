use std::io;
use std::path::PathBuf;

/// Errors raised while constructing a memory model
///
/// Evaluation never fails once construction has succeeded, so every variant
/// here is a construction-time error.
#[derive(Debug)]
pub enum MemoryError {
    /// The initialization file could not be opened
    InitFileOpen { path: PathBuf, source: io::Error },
    /// A required parameter was not supplied
    MissingParameter(String),
    /// A parameter was supplied with an unusable value
    InvalidParameter { name: String, reason: String },
    /// The parameter bag itself could not be parsed
    InvalidConfig(String),
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryError::InitFileOpen { path, source } => {
                write!(f, "Cannot open init file '{}': {}", path.display(), source)
            }
            MemoryError::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            MemoryError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter {}: {}", name, reason)
            }
            MemoryError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemoryError::InitFileOpen { source, .. } => Some(source),
            _ => None,
        }
    }
}
