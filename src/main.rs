use clap::Parser;
use log::{debug, warn};
use monarch_session::AppError;
use monarch_session::cli::dispatcher::Dispatcher;
use monarch_session::cli::main_types::Cli;
use monarch_session::storage::config::Config;
use monarch_session::storage::env_file::EnvFile;
use monarch_session::storage::token_store::TokenStore;
use monarch_session::utils::logging::init_logging;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = Config::config_file_path(cli.config_dir.as_deref())?;
    let config = Config::load(Some(config_path.clone()))?;

    let root = config.resolve_root(cli.root)?;
    let env_file = config.resolve_env_file(&root, cli.env_file);
    let base_url = config.api_base_url()?;

    populate_environment(&env_file);

    let store = TokenStore::new(env_file, root).with_base_url(base_url);
    Dispatcher::new(store, config_path).dispatch(cli.command)
}

/// Export the env file into the process environment with the same parser the
/// token store writes with. Variables already set are left alone.
fn populate_environment(env_file: &Path) {
    let entries = match EnvFile::read(env_file) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not load {}: {}", env_file.display(), e);
            return;
        }
    };

    for (key, value) in entries.iter() {
        if key.is_empty() || key.contains('\0') || value.contains('\0') {
            warn!("Skipping unusable entry '{}' in {}", key, env_file.display());
            continue;
        }
        if std::env::var_os(key).is_some() {
            continue;
        }
        // SAFETY: called from main before any other thread is started
        unsafe {
            std::env::set_var(key, value);
        }
    }
    debug!("Loaded {} entries from {}", entries.len(), env_file.display());
}
