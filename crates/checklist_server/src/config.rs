//! Server configuration loaded from environment variables with defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CHECKLIST_HOST` | `127.0.0.1` |
//! | `CHECKLIST_PORT` | `8080` |
//! | `CHECKLIST_DB_PATH` | `checklist.sqlite3` (`:memory:` for in-memory) |
//! | `CHECKLIST_LOG_LEVEL` | `debug` in debug builds, `info` in release |
//! | `CHECKLIST_LOG_DIR` | `<cwd>/logs` |

use checklist_core::default_log_level;
use std::env;
use std::path::PathBuf;

pub const IN_MEMORY_DB_PATH: &str = ":memory:";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "checklist.sqlite3";
const DEFAULT_LOG_SUBDIR: &str = "logs";

/// Runtime settings for the checklist server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file path, or [`IN_MEMORY_DB_PATH`].
    pub db_path: String,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`; unset or unparseable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            host: non_empty("CHECKLIST_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: non_empty("CHECKLIST_PORT")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            db_path: non_empty("CHECKLIST_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            log_level: non_empty("CHECKLIST_LOG_LEVEL")
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_empty("CHECKLIST_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
        }
    }

    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_in_memory_db(&self) -> bool {
        self.db_path == IN_MEMORY_DB_PATH
    }
}

fn default_log_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| env::temp_dir())
        .join(DEFAULT_LOG_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, "checklist.sqlite3");
        assert_eq!(config.log_level, checklist_core::default_log_level());
        assert!(config.log_dir.is_absolute());
        assert!(config.log_dir.ends_with("logs"));
        assert!(!config.uses_in_memory_db());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("CHECKLIST_HOST", "0.0.0.0"),
            ("CHECKLIST_PORT", "9000"),
            ("CHECKLIST_DB_PATH", ":memory:"),
            ("CHECKLIST_LOG_LEVEL", "warn"),
            ("CHECKLIST_LOG_DIR", "/var/log/checklist"),
        ]);

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert!(config.uses_in_memory_db());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/checklist"));
    }

    #[test]
    fn unparseable_or_blank_values_fall_back() {
        let config = config_from(&[("CHECKLIST_PORT", "eighty"), ("CHECKLIST_HOST", "  ")]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }
}
