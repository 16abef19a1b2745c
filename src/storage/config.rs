use super::Result;
use crate::error::StorageError;
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.monarchmoney.com";
pub const DEFAULT_ENV_FILE: &str = ".env";
const CONFIG_FILE: &str = "config.toml";
const APP_NAME: &str = "monarch-session";

/// Optional settings read from `config.toml`. Every field falls back to a default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub root: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path(None)?,
        };

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(StorageError::file_io(&config_path, source)),
        };

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("{}: {}", config_path.display(), e),
        })
    }

    /// `<dir>/config.toml`, or the per-user config directory when `dir` is None.
    pub fn config_file_path(dir: Option<&Path>) -> Result<PathBuf> {
        match dir {
            Some(dir) => Ok(dir.join(CONFIG_FILE)),
            None => {
                let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
                Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
            }
        }
    }

    /// Installation root: explicit override, then `root`, then the working directory.
    pub fn resolve_root(&self, root_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(root) = root_override.or_else(|| self.root.clone()) {
            return Ok(root);
        }
        std::env::current_dir().map_err(|source| StorageError::file_io(Path::new("."), source))
    }

    /// Env file location. A relative `env_file` setting is taken relative to `root`.
    pub fn resolve_env_file(&self, root: &Path, env_file_override: Option<PathBuf>) -> PathBuf {
        if let Some(path) = env_file_override {
            return path;
        }
        match &self.env_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => root.join(path),
            None => root.join(DEFAULT_ENV_FILE),
        }
    }

    pub fn api_base_url(&self) -> crate::Result<String> {
        match &self.api_base_url {
            Some(url) => {
                validate_url(url)?;
                Ok(url.clone())
            }
            None => Ok(DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.root, None);
        assert_eq!(config.env_file, None);
        assert_eq!(
            config.api_base_url().expect("Default URL should be valid"),
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn test_config_load() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "root = \"/opt/monarch\"\nenv_file = \"secrets/.env\"\napi_base_url = \"http://localhost:8080\"\n",
        )
        .expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(config.root, Some(PathBuf::from("/opt/monarch")));
        assert_eq!(config.env_file, Some(PathBuf::from("secrets/.env")));
        assert_eq!(
            config.api_base_url().expect("URL should be valid"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Missing config should load defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "root = [unclosed").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = Config {
            api_base_url: Some("api.monarchmoney.com".to_string()),
            ..Config::default()
        };
        assert!(config.api_base_url().is_err());
    }

    #[test]
    fn test_resolve_root_precedence() {
        let config = Config {
            root: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        let root = config
            .resolve_root(Some(PathBuf::from("/from/flag")))
            .expect("Failed to resolve root");
        assert_eq!(root, PathBuf::from("/from/flag"));

        let root = config.resolve_root(None).expect("Failed to resolve root");
        assert_eq!(root, PathBuf::from("/from/config"));

        let root = Config::default()
            .resolve_root(None)
            .expect("Failed to resolve root");
        assert_eq!(root, std::env::current_dir().expect("No current dir"));
    }

    #[test]
    fn test_resolve_env_file() {
        let root = Path::new("/srv/app");

        assert_eq!(
            Config::default().resolve_env_file(root, None),
            PathBuf::from("/srv/app/.env")
        );

        let relative = Config {
            env_file: Some(PathBuf::from("conf/.env")),
            ..Config::default()
        };
        assert_eq!(
            relative.resolve_env_file(root, None),
            PathBuf::from("/srv/app/conf/.env")
        );

        let absolute = Config {
            env_file: Some(PathBuf::from("/etc/monarch.env")),
            ..Config::default()
        };
        assert_eq!(
            absolute.resolve_env_file(root, None),
            PathBuf::from("/etc/monarch.env")
        );

        assert_eq!(
            absolute.resolve_env_file(root, Some(PathBuf::from("override.env"))),
            PathBuf::from("override.env")
        );
    }

    #[test]
    fn test_config_file_path_with_dir() {
        let path = Config::config_file_path(Some(Path::new("/tmp/cfg"))).expect("Path");
        assert_eq!(path, PathBuf::from("/tmp/cfg/config.toml"));
    }
}
