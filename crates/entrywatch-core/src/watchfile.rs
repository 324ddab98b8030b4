use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Which enrollment center a run targets.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSettings {
    /// Numeric center id as it appears in the scheduler page DOM
    /// (`centerDetailsUS{id}` / `popoverUS{id}`).
    pub id: u32,
}

/// Pushover delivery credentials and optional message presentation.
#[derive(Clone, Deserialize)]
pub struct PushoverSettings {
    pub token: String,
    pub user: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
}

impl std::fmt::Debug for PushoverSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverSettings")
            .field("token", &"[redacted]")
            .field("user", &"[redacted]")
            .field("title", &self.title)
            .field("sound", &self.sound)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchFile {
    pub location: LocationSettings,
    pub pushover: PushoverSettings,
}

/// Load and validate the watch configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watch_file(path: &Path) -> Result<WatchFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watch_file: WatchFile = serde_yaml::from_str(&content)?;

    validate_watch_file(&watch_file)?;

    Ok(watch_file)
}

fn validate_watch_file(watch_file: &WatchFile) -> Result<(), ConfigError> {
    if watch_file.location.id == 0 {
        return Err(ConfigError::Validation(
            "location id must be a positive center id".to_string(),
        ));
    }

    if watch_file.pushover.token.trim().is_empty() {
        return Err(ConfigError::Validation(
            "pushover token must be non-empty".to_string(),
        ));
    }

    if watch_file.pushover.user.trim().is_empty() {
        return Err(ConfigError::Validation(
            "pushover user must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "watchfile_test.rs"]
mod tests;
