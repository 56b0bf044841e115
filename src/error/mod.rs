//! Error handling for the latency result analyzer

use thiserror::Error;

/// Custom error types for the latency result analyzer
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid invocation (wrong argument count, conflicting flags)
    #[error("Usage error: {0}")]
    Usage(String),

    /// I/O errors (missing or unreadable result file)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (malformed header, non-numeric sample line)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// The file ended before the declared number of samples was read
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Statistics calculation errors
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new unexpected-end-of-input error
    pub fn unexpected_eof<S: Into<String>>(message: S) -> Self {
        Self::UnexpectedEof(message.into())
    }

    /// Create a new statistics error
    pub fn statistics<S: Into<String>>(message: S) -> Self {
        Self::Statistics(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage(_) => "USAGE",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::UnexpectedEof(_) => "EOF",
            Self::Statistics(_) => "STATS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Parse(_) | Self::UnexpectedEof(_) => 1, // Invalid usage/input
            Self::Io(_) => 5,                                              // I/O issues
            Self::Statistics(_) => 6,                                      // Analysis issues
            Self::Internal(_) => 99,                                       // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Usage(_) | Self::Parse(_) | Self::UnexpectedEof(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::Statistics(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::parse(format!("Float parse error: {}", error))
    }
}

/// Convenience result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_and_display() {
        let err = AppError::parse("bad header line");
        assert_eq!(err.to_string(), "Parsing error: bad header line");
        assert_eq!(err.category(), "PARSE");

        let err = AppError::unexpected_eof("expected 10 samples, got 5");
        assert_eq!(
            err.to_string(),
            "Unexpected end of input: expected 10 samples, got 5"
        );
        assert_eq!(err.category(), "EOF");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::usage("x").exit_code(), 1);
        assert_eq!(AppError::parse("x").exit_code(), 1);
        assert_eq!(AppError::unexpected_eof("x").exit_code(), 1);
        assert_eq!(AppError::io("x").exit_code(), 5);
        assert_eq!(AppError::statistics("x").exit_code(), 6);
        assert_eq!(AppError::internal("x").exit_code(), 99);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_parse_error_conversions() {
        let err: AppError = "abc".parse::<usize>().unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));

        let err: AppError = "abc".parse::<f64>().unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_console_format_without_color() {
        let err = AppError::io("cannot open result.txt");
        let formatted = err.format_for_console(false);
        assert_eq!(formatted, "[IO] I/O error: cannot open result.txt");
    }
}
