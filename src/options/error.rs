use std::path::PathBuf;
use thiserror::Error;

use super::value::ValueKind;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("no options file name given")]
    MissingFilename,

    #[error("options file '{0}' not found")]
    FileNotFound(PathBuf),

    #[error("failed to read options file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{path}' line {line_number}: {source}")]
    Parse {
        path: PathBuf,
        line_number: usize,
        source: ParseError,
    },

    #[error("command-line argument '{argument}': {source}")]
    CommandLine {
        argument: String,
        source: ParseError,
    },

    #[error("empty options file '{0}'")]
    EmptyFile(PathBuf),

    #[error("empty key passed to options store")]
    EmptyKey,

    #[error("option '{key}': {expected} expected, got '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: ValueKind,
    },

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Failures of the pure line parser. Each carries the raw offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing ']' in line: {line}")]
    MissingBracket { line: String },

    #[error("empty key or value in line: {line}")]
    EmptyKeyOrValue { line: String },
}
