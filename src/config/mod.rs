#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{EmployeeError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_BASE_ADDRESS: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const BASE_ADDRESS_ENV: &str = "EMPLOYEE_API_BASE_ADDRESS";
pub const TIMEOUT_MS_ENV: &str = "EMPLOYEE_API_TIMEOUT_MS";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex"));

/// Connection settings for the Employee API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClientConfig {
    /// Root URL prefixed to every request path.
    #[serde(default = "default_base_address")]
    pub base_address: String,
    /// Per-request abort threshold in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_address() -> String {
    DEFAULT_BASE_ADDRESS.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_address: default_base_address(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiClientConfig,
}

impl ApiClientConfig {
    pub fn new(base_address: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_address: base_address.into(),
            timeout_ms,
        }
    }

    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the `[api]` table; `${VAR}` placeholders are expanded first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        let file: ConfigFile = toml::from_str(&processed).map_err(|e| {
            EmployeeError::config("toml_parsing", format!("TOML parsing error: {}", e))
        })?;
        Ok(file.api)
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_address) = std::env::var(BASE_ADDRESS_ENV) {
            self.base_address = base_address;
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_MS_ENV) {
            self.timeout_ms = timeout.parse().map_err(|_| {
                EmployeeError::config(
                    TIMEOUT_MS_ENV,
                    format!("'{}' is not a whole number of milliseconds", timeout),
                )
            })?;
        }
        Ok(self)
    }
}

impl Validate for ApiClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_address", &self.base_address)?;
        validate_positive_number("api.timeout_ms", self.timeout_ms, 1)?;
        Ok(())
    }
}

/// Expands `${VAR}` from the environment; unset variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_api_table() {
        let toml_content = r#"
[api]
base_address = "https://hr.example.com/api"
timeout_ms = 2500
"#;

        let config = ApiClientConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_address, "https://hr.example.com/api");
        assert_eq!(config.timeout_ms, 2500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let config = ApiClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ApiClientConfig::default());

        let config = ApiClientConfig::from_toml_str("[api]\ntimeout_ms = 50\n").unwrap();
        assert_eq!(config.base_address, DEFAULT_BASE_ADDRESS);
        assert_eq!(config.timeout_ms, 50);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMPLOYEE_DIRECTORY_TEST_HOST", "https://test.api.com");

        let toml_content = r#"
[api]
base_address = "${EMPLOYEE_DIRECTORY_TEST_HOST}/v1"
"#;

        let config = ApiClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_address, "https://test.api.com/v1");

        std::env::remove_var("EMPLOYEE_DIRECTORY_TEST_HOST");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let toml_content = r#"
[api]
base_address = "${EMPLOYEE_DIRECTORY_SURELY_UNSET}"
"#;

        let config = ApiClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_address, "${EMPLOYEE_DIRECTORY_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(ApiClientConfig::new("ftp://example.com", 100)
            .validate()
            .is_err());
        assert!(ApiClientConfig::new("http://example.com", 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ApiClientConfig::from_toml_str("[api\n").unwrap_err();
        assert!(matches!(err, EmployeeError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_address = \"http://127.0.0.1:9000\"\n")
            .unwrap();

        let config = ApiClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_address, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
