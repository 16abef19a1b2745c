use crate::error::{AppError, CliError};
use rpassword::read_password;
use std::io::{self, Write};

/// Token entered by the user, trimmed and non-empty
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInput {
    pub token: String,
}

impl TokenInput {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Token cannot be empty".to_string(),
            )));
        }
        Ok(Self {
            token: token.to_string(),
        })
    }

    /// Use the command line argument if given, otherwise prompt without echo
    pub fn collect(arg: Option<String>) -> Result<Self, AppError> {
        if let Some(raw) = arg {
            return Self::new(&raw);
        }

        print!("Monarch token: ");
        io::stdout().flush().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to flush stdout: {}",
                e
            )))
        })?;

        let raw = read_password().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to read token: {}",
                e
            )))
        })?;

        Self::new(&raw)
    }
}
