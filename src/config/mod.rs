#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_header, validate_range, validate_url, Validate};
use std::collections::HashMap;
use std::time::Duration;

/// Effective settings after layering command-line overrides on a config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn layered(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        let base = file.cloned().unwrap_or_default();
        Self {
            endpoint: overrides
                .endpoint
                .unwrap_or_else(|| base.endpoint().to_string()),
            timeout_seconds: overrides.timeout_seconds.or(base.service.timeout_seconds),
            headers: base.headers(),
            format: overrides.format.unwrap_or_else(|| base.output_format()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            headers: HashMap::new(),
            format: OutputFormat::Table,
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout", timeout, 1, toml_config::MAX_TIMEOUT_SECONDS)?;
        }
        for (name, value) in &self.headers {
            validate_header("headers", name, value)?;
        }
        Ok(())
    }
}
