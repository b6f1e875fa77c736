//! Error handling for the distance sampler

use thiserror::Error;

/// Custom error types for the distance sampler
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (CLI usage, environment values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external command could not be started
    #[error("Failed to start command: {0}")]
    Spawn(String),

    /// The external command ran but exited with a non-zero status
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// The command's output could not be parsed as a distance
    #[error("Output parse error: {0}")]
    OutputParse(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new spawn error
    pub fn spawn<S: Into<String>>(message: S) -> Self {
        Self::Spawn(message.into())
    }

    /// Create a new command failure error
    pub fn command_failed<S: Into<String>>(message: S) -> Self {
        Self::CommandFailed(message.into())
    }

    /// Create a new output parse error
    pub fn output_parse<S: Into<String>>(message: S) -> Self {
        Self::OutputParse(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Spawn(_) => "SPAWN",
            Self::CommandFailed(_) => "COMMAND",
            Self::OutputParse(_) => "PARSE",
            Self::Io(_) => "IO",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check whether this error came from the measurement loop itself,
    /// as opposed to configuration or usage problems
    pub fn is_measurement_failure(&self) -> bool {
        matches!(
            self,
            Self::Spawn(_) | Self::CommandFailed(_) | Self::OutputParse(_)
        )
    }

    /// The canonical failure line printed when a measurement aborts
    pub fn failure_line(&self) -> String {
        format!("Failed to run the command: {}", self)
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the format of your command line arguments or environment values.", msg)
            }
            Self::Spawn(msg) => {
                format!("Could not start the measured command: {}\n\nSuggestion: Check that the program exists, is executable, and the path is correct.", msg)
            }
            Self::CommandFailed(msg) => {
                format!("The measured command failed: {}\n\nSuggestion: Run the command by hand to see why it exits non-zero.", msg)
            }
            Self::OutputParse(msg) => {
                format!("Could not parse the command's output: {}\n\nSuggestion: The command must print a whitespace-delimited integer as its first output token.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file permissions and disk space.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) => 1, // Invalid configuration/usage
            Self::Spawn(_) => 2,                        // Could not start the command
            Self::CommandFailed(_) => 3,                // Command exited non-zero
            Self::OutputParse(_) => 4,                  // Unparseable output
            Self::Io(_) => 5,                           // I/O issues
            Self::Internal(_) => 99,                    // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Spawn(_) | Self::CommandFailed(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::OutputParse(_) => {
                    format!("[{}] {}", category.magenta().bold(), message.magenta())
                }
                Self::Io(_) => {
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
        Self::output_parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::output_parse(format!("UTF-8 decode error: {}", error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error = e.into();
            let context = f();
            AppError::internal(format!("{}: {}", context, original_error))
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}
