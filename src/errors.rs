use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

/// Every way an evaluation can fail. Callers match on the variant to pick
/// an exit code; the `Display` text is ready to print as-is.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Malformed or unknown directive, bad `@base` value, or an invalid
    /// data token in strict mode.
    #[error("parse error at {}:{line}: {message}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// An `@include` target that is missing or cannot be read.
    #[error("include {reason}: {}", .path.display())]
    IncludeIo { path: PathBuf, reason: String },

    /// A file included from itself, directly or through other files.
    #[error("include cycle detected: {}", .chain.iter().map(|p| p.display()).join(" -> "))]
    IncludeCycle { chain: Vec<PathBuf> },

    /// The top-level input file is missing or unreadable.
    #[error("cannot read input file {}: {reason}", .path.display())]
    InputFile { path: PathBuf, reason: String },
}

/// Fieldless mirror of [`EvalError`]'s variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    IncludeIo,
    IncludeCycle,
    InputFile,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Parse { .. } => ErrorKind::Parse,
            EvalError::IncludeIo { .. } => ErrorKind::IncludeIo,
            EvalError::IncludeCycle { .. } => ErrorKind::IncludeCycle,
            EvalError::InputFile { .. } => ErrorKind::InputFile,
        }
    }
}

// Type alias for results that use `EvalError` as the error type
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cycle_message_lists_chain_in_order() {
        let err = EvalError::IncludeCycle {
            chain: vec!["/t/a.txt".into(), "/t/b.txt".into(), "/t/a.txt".into()],
        };
        assert_eq!(
            err.to_string(),
            "include cycle detected: /t/a.txt -> /t/b.txt -> /t/a.txt"
        );
        assert_eq!(err.kind(), ErrorKind::IncludeCycle);
    }

    #[test]
    fn parse_message_carries_location() {
        let err = EvalError::Parse {
            file: "main.txt".into(),
            line: 3,
            message: "unknown directive: @nope".into(),
        };
        assert_eq!(err.to_string(), "parse error at main.txt:3: unknown directive: @nope");
    }
}
