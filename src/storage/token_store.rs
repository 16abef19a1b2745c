//! Monarch token persistence
//!
//! The token is written to a `.env` file under the reserved key and read back
//! from the process environment under the same name. Populating the
//! environment from the file is left to process startup (see `main.rs`).
//!
//! `save` propagates failures; `load` and `delete` log them and fall back to
//! a safe default. `try_load` and `try_delete` expose the typed errors for
//! callers that need to tell "no token" apart from "storage unreadable".

use super::Result;
use super::config::DEFAULT_API_BASE_URL;
use super::env_file::EnvFile;
use super::legacy;
use crate::api::client::MonarchClient;
use crate::error::StorageError;
use crate::utils::validation::validate_token_line;
use log::{error, info, warn};
use std::env::{self, VarError};
use std::path::{Path, PathBuf};

/// Reserved key, used both in the env file and as the environment variable name.
pub const MONARCH_TOKEN_ENV_VAR: &str = "MONARCH_TOKEN";

#[derive(Debug, Clone)]
pub struct TokenStore {
    env_file: PathBuf,
    legacy_root: PathBuf,
    token_var: String,
    base_url: String,
}

impl TokenStore {
    pub fn new(env_file: PathBuf, legacy_root: PathBuf) -> Self {
        Self {
            env_file,
            legacy_root,
            token_var: MONARCH_TOKEN_ENV_VAR.to_string(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_token_var(mut self, name: impl Into<String>) -> Self {
        self.token_var = name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn legacy_root(&self) -> &Path {
        &self.legacy_root
    }

    pub fn token_var(&self) -> &str {
        &self.token_var
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upsert the token into the env file, then clean up legacy artifacts.
    pub fn save(&self, token: &str) -> Result<()> {
        let result = self.write_token(token);
        if let Err(e) = &result {
            error!("Failed to save token to {}: {}", self.env_file.display(), e);
        }
        result
    }

    fn write_token(&self, token: &str) -> Result<()> {
        validate_token_line(token)?;

        let mut env_file = EnvFile::read(&self.env_file)?;
        env_file.set(&self.token_var, token);
        env_file.write(&self.env_file)?;
        info!("Token saved to {}", self.env_file.display());

        self.cleanup_legacy_artifacts();
        Ok(())
    }

    /// Token from the process environment. Unset and empty both mean "no token".
    pub fn try_load(&self) -> Result<Option<String>> {
        match env::var(&self.token_var) {
            Ok(token) if !token.is_empty() => Ok(Some(token)),
            Ok(_) | Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(StorageError::InvalidToken {
                reason: format!("{} is not valid UTF-8", self.token_var),
            }),
        }
    }

    pub fn load(&self) -> Option<String> {
        match self.try_load() {
            Ok(Some(token)) => {
                info!("Token loaded from environment variable {}", self.token_var);
                Some(token)
            }
            Ok(None) => {
                info!("No token found in environment variable {}", self.token_var);
                None
            }
            Err(e) => {
                error!("Failed to load token from environment: {}", e);
                None
            }
        }
    }

    /// Remove the token from the env file. Returns whether the key was present;
    /// the file is only rewritten when it was.
    pub fn try_delete(&self) -> Result<bool> {
        let mut env_file = EnvFile::read(&self.env_file)?;

        let removed = env_file.remove(&self.token_var).is_some();
        if removed {
            env_file.write(&self.env_file)?;
            info!("Token deleted from {}", self.env_file.display());
        } else {
            info!("No token found in {} to delete", self.env_file.display());
        }

        self.cleanup_legacy_artifacts();
        Ok(removed)
    }

    pub fn delete(&self) {
        if let Err(e) = self.try_delete() {
            error!("Failed to delete token from {}: {}", self.env_file.display(), e);
        }
    }

    pub fn get_authenticated_client(&self) -> Option<MonarchClient> {
        let token = self.load()?;

        match MonarchClient::with_token(self.base_url.clone(), token) {
            Ok(client) => {
                info!("Monarch client created with stored token");
                Some(client)
            }
            Err(e) => {
                error!("Failed to create Monarch client: {}", e);
                None
            }
        }
    }

    /// Persist the token held by an authenticated client, if any.
    pub fn save_from_client(&self, client: &MonarchClient) -> Result<()> {
        match client.token() {
            Some(token) => self.save(token),
            None => {
                warn!("Monarch client has no token to save");
                Ok(())
            }
        }
    }

    pub(crate) fn cleanup_legacy_artifacts(&self) -> Vec<PathBuf> {
        legacy::cleanup(&self.legacy_root)
    }
}
