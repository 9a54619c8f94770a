//! Configuration for tracing output

use serde::{Deserialize, Serialize};

use crate::error::ObservabilityError;

const DEFAULT_SERVICE_NAME: &str = "theme-manager";

/// Observability configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded on the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Write formatted events to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "theme_core=debug")
    /// Defaults to "warn" if not set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Include the event target (module path) in console output
    #[serde(default)]
    pub with_target: bool,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Show event targets
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `THEME_SERVICE_NAME` → service_name
    /// - `THEME_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name = std::env::var("THEME_SERVICE_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

        let log_level = std::env::var("THEME_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        Self {
            service_name,
            log_level,
            ..Default::default()
        }
    }

    /// Rejects an empty service name.
    pub fn validate(&self) -> Result<(), ObservabilityError> {
        if self.service_name.trim().is_empty() {
            return Err(ObservabilityError::Config("service_name must not be empty".to_string()));
        }
        Ok(())
    }
}
