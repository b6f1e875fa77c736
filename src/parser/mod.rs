//! Output parsing for the measured command
//!
//! The measured command writes at least one whitespace-delimited token to
//! stdout; the first token is the distance in kilometers as a base-10
//! integer.

use crate::error::{AppError, Result};

/// Extract the measured distance from one run's captured stdout.
///
/// Takes the first whitespace-delimited token and parses it as a signed
/// base-10 integer. Everything after the first token is ignored.
pub fn parse_distance(output: &str) -> Result<i64> {
    let token = output.split_whitespace().next().ok_or_else(|| {
        AppError::output_parse("Command produced no output to parse a distance from")
    })?;

    token.parse::<i64>().map_err(|_| {
        AppError::output_parse(format!(
            "First output token '{}' is not a base-10 integer",
            token
        ))
    })
}
