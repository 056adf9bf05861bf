use std::env;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output (default).
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used by the in-memory cache.
    #[cfg_attr(feature = "redis", allow(dead_code))]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "kinlog.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "kinlog.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `LOG_FORMAT` - `pretty` or `json` (default: "pretty")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(10_000),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "kinlog.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.sqlite_path, "kinlog.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("CACHE_MAX_ENTRIES", "500"),
            ("SQLITE_PATH", "/var/lib/kinlog/data.db"),
            ("REDIS_URL", "redis://cache:6379"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.cache_max_entries, 500);
        assert_eq!(config.sqlite_path, "/var/lib/kinlog/data.db");
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("CACHE_MAX_ENTRIES", "lots"), ("LOG_FORMAT", "xml")]);

        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_zero_max_entries_falls_back() {
        let config = config_from(&[("CACHE_MAX_ENTRIES", "0")]);

        assert_eq!(config.cache_max_entries, 10_000);
    }
}
