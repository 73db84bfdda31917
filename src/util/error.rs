// tabulog - util/error.rs
//
// Typed error type with context-preserving error chains.
// Unrecognized log lines are NOT errors here: they degrade into footnotes
// inside the core pass. The only failure surface is the I/O boundary.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a tabulog run.
#[derive(Debug)]
pub enum TabulogError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl TabulogError {
    /// Attach path and operation context to a bare `io::Error`.
    pub fn io(path: &std::path::Path, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }
}

impl fmt::Display for TabulogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TabulogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for tabulog results.
pub type Result<T> = std::result::Result<T, TabulogError>;
