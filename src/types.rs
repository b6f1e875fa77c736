//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// The external command to sample: a program path and its ordered arguments.
///
/// Fixed at startup and immutable for the duration of the measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Path to the measured executable
    pub program: String,
    /// Arguments passed on every invocation
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command spec from a program path and argument list
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build a command spec from a full command line split into parts.
    /// The first part is the program, the rest are its arguments.
    pub fn from_parts(parts: &[String]) -> Result<Self> {
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| AppError::config("Command cannot be empty"))?;

        if program.is_empty() {
            return Err(AppError::config("Command program cannot be empty"));
        }

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Render the full command line for display in messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
