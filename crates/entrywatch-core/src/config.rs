use crate::app_config::{AppConfig, DEFAULT_SCHEDULER_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let watch_path = PathBuf::from(or_default("ENTRYWATCH_WATCH_PATH", "./config/watch.yaml"));
    let log_level = or_default("ENTRYWATCH_LOG_LEVEL", "info");
    let scheduler_url = or_default("ENTRYWATCH_SCHEDULER_URL", DEFAULT_SCHEDULER_URL);

    let wait_timeout_secs = parse_u64("ENTRYWATCH_WAIT_TIMEOUT_SECS", "5")?;
    let settle_delay_ms = parse_u64("ENTRYWATCH_SETTLE_DELAY_MS", "2000")?;
    let nav_timeout_secs = parse_u64("ENTRYWATCH_NAV_TIMEOUT_SECS", "30")?;
    let notify_timeout_secs = parse_u64("ENTRYWATCH_NOTIFY_TIMEOUT_SECS", "30")?;

    let chrome_executable = lookup("ENTRYWATCH_CHROME_EXECUTABLE").ok().map(PathBuf::from);

    Ok(AppConfig {
        watch_path,
        log_level,
        scheduler_url,
        wait_timeout_secs,
        settle_delay_ms,
        nav_timeout_secs,
        notify_timeout_secs,
        chrome_executable,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.watch_path.to_string_lossy(), "./config/watch.yaml");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.scheduler_url, DEFAULT_SCHEDULER_URL);
        assert_eq!(cfg.wait_timeout_secs, 5);
        assert_eq!(cfg.settle_delay_ms, 2000);
        assert_eq!(cfg.nav_timeout_secs, 30);
        assert_eq!(cfg.notify_timeout_secs, 30);
        assert!(cfg.chrome_executable.is_none());
    }

    #[test]
    fn build_app_config_watch_path_override() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_WATCH_PATH", "/etc/entrywatch/watch.yaml");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.watch_path.to_string_lossy(),
            "/etc/entrywatch/watch.yaml"
        );
    }

    #[test]
    fn build_app_config_scheduler_url_override() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_SCHEDULER_URL", "http://localhost:8080/fixture");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scheduler_url, "http://localhost:8080/fixture");
    }

    #[test]
    fn build_app_config_wait_timeout_override() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_WAIT_TIMEOUT_SECS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.wait_timeout_secs, 10);
    }

    #[test]
    fn build_app_config_wait_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_WAIT_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTRYWATCH_WAIT_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ENTRYWATCH_WAIT_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_settle_delay_invalid() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_SETTLE_DELAY_MS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTRYWATCH_SETTLE_DELAY_MS"),
            "expected InvalidEnvVar(ENTRYWATCH_SETTLE_DELAY_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_chrome_executable_override() {
        let mut map = HashMap::new();
        map.insert("ENTRYWATCH_CHROME_EXECUTABLE", "/usr/bin/chromium");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.chrome_executable.as_deref().map(|p| p.to_string_lossy().into_owned()),
            Some("/usr/bin/chromium".to_string())
        );
    }
}
