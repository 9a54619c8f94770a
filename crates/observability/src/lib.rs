//! Theme Observability - tracing setup shared by the theme-manager binaries
//!
//! # Quick Start
//!
//! ```no_run
//! use theme_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("themectl").with_log_level("debug");
//! init(config).unwrap();
//!
//! tracing::info!("started");
//! ```
//!
//! # Environment Variables
//!
//! - `THEME_SERVICE_NAME` - Service name
//! - `THEME_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod spans;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use spans::{record_duration, record_error};
pub use telemetry::{init, init_from_env};
