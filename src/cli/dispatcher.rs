use crate::api::client::GRAPHQL_PATH;
use crate::cli::main_types::{Commands, ConfigCommands, TokenCommands};
use crate::core::auth::TokenInput;
use crate::error::{ApiError, AppError};
use crate::storage::token_store::TokenStore;
use crate::utils::text::mask_secret;
use log::debug;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use std::path::PathBuf;

pub struct Dispatcher {
    store: TokenStore,
    config_path: PathBuf,
}

impl Dispatcher {
    pub fn new(store: TokenStore, config_path: PathBuf) -> Self {
        Self { store, config_path }
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Token { command } => self.handle_token_command(command),
            Commands::Status => self.handle_status(),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_token_command(&self, command: TokenCommands) -> Result<(), AppError> {
        match command {
            TokenCommands::Save { token } => {
                debug!("Running token save");
                let input = TokenInput::collect(token)?;
                self.store.save(&input.token)?;
                println!("✅ Token saved to {}", self.store.env_file().display());
                Ok(())
            }
            TokenCommands::Delete => {
                debug!("Running token delete");
                if self.store.try_delete()? {
                    println!("🗑️ Token deleted from {}", self.store.env_file().display());
                } else {
                    println!("No token found in {}", self.store.env_file().display());
                }
                Ok(())
            }
            TokenCommands::Show => {
                debug!("Running token show");
                match self.store.try_load()? {
                    Some(token) => println!("{}: {}", self.store.token_var(), mask_secret(&token)),
                    None => println!("{}: (not set)", self.store.token_var()),
                }
                Ok(())
            }
        }
    }

    fn handle_status(&self) -> Result<(), AppError> {
        debug!("Running status");

        println!("Authentication Status:");
        println!("=====================");

        match self.store.get_authenticated_client() {
            Some(client) if client.is_authenticated() => {
                let request = client
                    .build_request(Method::POST, GRAPHQL_PATH)
                    .build()
                    .map_err(|e| ApiError::ClientInit {
                        message: format!("Failed to build request: {}", e),
                    })?;
                let attached = request.headers().contains_key(AUTHORIZATION);

                println!("Client: ✅ Authenticated client ready");
                println!("Endpoint: {}", request.url());
                println!(
                    "Authorization: {}",
                    if attached { "attached" } else { "missing" }
                );
            }
            _ => {
                println!("Client: ❌ No usable token (use 'token save' to store one)");
                println!("API: {}", self.store.base_url());
            }
        }

        Ok(())
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                println!("Config file: {}", self.config_path.display());
                println!("Root: {}", self.store.legacy_root().display());
                println!("Env file: {}", self.store.env_file().display());
                println!("Token variable: {}", self.store.token_var());
                println!("API base URL: {}", self.store.base_url());
                Ok(())
            }
        }
    }
}
