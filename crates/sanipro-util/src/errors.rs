use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all sanipro operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SaniproError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The prompt could not be parsed.
    #[error("Parse error at offset {offset}: {message}")]
    #[diagnostic(help("Escape literal brackets with a backslash, e.g. \\("))]
    Parse { offset: usize, message: String },

    /// Invalid or unreadable configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.sanipro/config.toml for syntax errors"))]
    Config { message: String },

    /// The command line asks for something that cannot be done.
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SaniproResult<T> = miette::Result<T>;
