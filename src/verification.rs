//! One-time verification code extraction.

use regex::Regex;

use crate::error::{MsgCodeError, Result};

/// Shortest digit run accepted by default
pub const DEFAULT_MIN_DIGITS: usize = 4;
/// Longest digit run accepted by default
pub const DEFAULT_MAX_DIGITS: usize = 6;

/// Finds the first run of ASCII digits within a length window.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    pattern: Regex,
}

impl CodeExtractor {
    /// Extractor for runs of `min_digits..=max_digits` ASCII digits.
    pub fn new(min_digits: usize, max_digits: usize) -> Result<Self> {
        if min_digits == 0 || min_digits > max_digits {
            return Err(MsgCodeError::InvalidConfig(format!(
                "Invalid code length window {min_digits}..={max_digits}"
            )));
        }

        // `\d` would also match non-ASCII digits
        let pattern = Regex::new(&format!("[0-9]{{{min_digits},{max_digits}}}"))
            .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to compile code regex: {e}")))?;

        Ok(Self { pattern })
    }

    /// First matching digit run, left to right, or an empty string.
    #[must_use]
    pub fn extract(&self, body: &str) -> String {
        self.pattern
            .find(body)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self {
            pattern: Regex::new("[0-9]{4,6}").unwrap_or_else(|_| unreachable!("static pattern")),
        }
    }
}

/// Extract a 4 to 6 digit verification code from `body`.
#[must_use]
pub fn extract_verification_code(body: &str) -> String {
    CodeExtractor::default().extract(body)
}
