use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monarch-session")]
#[command(about = "Store and inspect the Monarch Money API token")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Installation root; the env file and legacy session files live here
    #[arg(long, global = true, env = "MONARCH_SESSION_ROOT")]
    pub root: Option<PathBuf>,

    /// Env file holding the token (default: <root>/.env)
    #[arg(long, global = true, env = "MONARCH_SESSION_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Token management
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
    /// Show whether an authenticated client can be built
    Status,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Save a token to the env file
    Save {
        /// Token value; prompted for when omitted
        token: Option<String>,
    },
    /// Remove the token from the env file
    Delete,
    /// Show the token from the environment, masked
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
}
