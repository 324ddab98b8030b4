pub mod app_config;
pub mod config;
pub mod report;
pub mod watchfile;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use report::{AvailabilityReport, AvailabilityStatus};
pub use watchfile::{load_watch_file, LocationSettings, PushoverSettings, WatchFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watch file {path}: {source}")]
    WatchFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watch file: {0}")]
    WatchFileParse(#[from] serde_yaml::Error),

    #[error("invalid watch file: {0}")]
    Validation(String),
}
