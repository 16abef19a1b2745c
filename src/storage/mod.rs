//! Storage layer for monarch-session
//!
//! Handles the settings file, the `.env` token file and cleanup of the
//! session files written by earlier versions.

use crate::error::StorageError;

pub mod config;
pub mod env_file;
pub mod legacy;
pub mod token_store;

type Result<T> = std::result::Result<T, StorageError>;
