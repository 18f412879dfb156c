pub mod toml_config;

use crate::adapters::COURSERA_ENDPOINT;
use crate::core::{ConfigProvider, DEFAULT_RESULT_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_catalog_endpoint, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use clap::Parser;
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const MAX_RESULT_LIMIT: usize = 100;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-recom")]
#[command(about = "Recommends courses for a list of skills using the Coursera catalog")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value = "5001")]
    pub port: u16,

    #[arg(long, default_value = COURSERA_ENDPOINT)]
    pub catalog_endpoint: String,

    #[arg(long, default_value = "2", help = "Maximum courses requested per skill")]
    pub result_limit: usize,

    #[arg(long, help = "Timeout for each catalog request, in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_endpoint: COURSERA_ENDPOINT.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            timeout_seconds: None,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn result_limit(&self) -> usize {
        self.result_limit
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_catalog_endpoint("catalog_endpoint", &self.catalog_endpoint)?;
        validate_range("result_limit", self.result_limit, 1, MAX_RESULT_LIMIT)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["course-recom"]);

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 5001);
        assert_eq!(config.catalog_endpoint(), COURSERA_ENDPOINT);
        assert_eq!(config.result_limit(), 2);
        assert_eq!(config.request_timeout(), None);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "course-recom",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--catalog-endpoint",
            "http://localhost:9000/api/courses.v1",
            "--result-limit",
            "5",
            "--timeout-seconds",
            "10",
            "--verbose",
        ]);

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.result_limit(), 5);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert!(config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let config = CliConfig {
            result_limit: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            catalog_endpoint: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            catalog_endpoint: "https://api.coursera.org/api/courses.v1?limit=10".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            timeout_seconds: Some(0),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
