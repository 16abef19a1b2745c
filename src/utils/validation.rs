//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input and
//! configuration values before they reach storage or the API client.

use crate::error::{CliError, StorageError};

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Check that a token fits on a single `KEY=VALUE` line
pub fn validate_token_line(token: &str) -> Result<(), StorageError> {
    if token.contains(['\n', '\r']) {
        return Err(StorageError::InvalidToken {
            reason: "token must not contain line breaks".to_string(),
        });
    }
    Ok(())
}
