use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to initialize HTTP client: {message}")]
    ClientInit { message: String },
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

impl StorageError {
    pub(crate) fn file_io(path: &std::path::Path, source: std::io::Error) -> Self {
        StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::FileIo { path, .. }) => {
                Some(format!("Check that '{}' is readable and writable", path))
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the settings file, see 'config show' for its path".to_string())
            }
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                Some("Pass --config-dir to choose a settings directory".to_string())
            }
            AppError::Api(ApiError::InvalidToken { .. }) => {
                Some("'monarch-session token save' to store a fresh token".to_string())
            }
            _ => None,
        }
    }
}
