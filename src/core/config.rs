use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_endpoint() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_console() -> bool {
    true
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or fall back to the built-in
    /// defaults when the file does not exist. The tool is meant to run with
    /// no arguments and no config present.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate fetch config
        if self.fetch.endpoint.is_empty() {
            bail!("endpoint must not be empty");
        }

        if !self.fetch.endpoint.starts_with("http://") && !self.fetch.endpoint.starts_with("https://")
        {
            bail!(
                "endpoint '{}' must be an http:// or https:// URL",
                self.fetch.endpoint
            );
        }

        if self.fetch.timeout_secs == 0 {
            bail!("timeout_secs must be greater than 0");
        }

        // Validate report config
        if self.report.output_dir.as_os_str().is_empty() {
            bail!("output_dir must not be empty");
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch.endpoint, "https://jsonplaceholder.typicode.com/users");
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("no-such-config.toml")).unwrap();
        assert_eq!(config.fetch.timeout_secs, 10);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults_for_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[fetch]\nendpoint = \"http://localhost:9999/users\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fetch.endpoint, "http://localhost:9999/users");
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut config = Config::default();
        config.fetch.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = Config::default();
        config.fetch.endpoint = "ftp://example.com/users".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fetch\nendpoint = ").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
