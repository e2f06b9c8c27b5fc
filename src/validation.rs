use std::path::Path;

use crate::error::{MsgCodeError, Result};
use crate::models::OutputFormat;

/// Validation utilities for command-line and configuration input
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate the message store path
    pub fn validate_store_path(path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy();

        if path_str.trim().is_empty() {
            return Err(invalid("Store path cannot be empty"));
        }

        if path_str.contains('\0') {
            return Err(invalid("Store path contains invalid characters"));
        }

        if path_str.len() > 4096 {
            return Err(invalid("Store path too long (max 4096 characters)"));
        }

        Ok(())
    }

    /// Validate the label shown for outgoing messages without a handle
    pub fn validate_self_label(label: &str) -> Result<()> {
        if label.chars().count() > 100 {
            return Err(invalid("Self label too long (max 100 characters)"));
        }

        if label.contains('\0') || label.contains('\r') || label.contains('\n') {
            return Err(invalid("Self label contains invalid characters"));
        }

        Ok(())
    }

    /// Validate the verification code length window
    pub fn validate_code_digits(min_digits: usize, max_digits: usize) -> Result<()> {
        if min_digits == 0 {
            return Err(invalid("min_digits must be greater than 0"));
        }

        if min_digits > max_digits {
            return Err(MsgCodeError::InvalidConfig(format!(
                "min_digits ({min_digits}) cannot exceed max_digits ({max_digits})"
            )));
        }

        if max_digits > 32 {
            return Err(invalid("max_digits too large (max 32)"));
        }

        Ok(())
    }

    /// Validate an output format name
    pub fn validate_output_format(format: &str) -> Result<()> {
        format.parse::<OutputFormat>().map(|_| ())
    }
}

fn invalid(message: &str) -> MsgCodeError {
    MsgCodeError::InvalidConfig(message.to_string())
}
