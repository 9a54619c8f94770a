//! CLI entry point for theme-manager.

mod cli;
mod commands;
mod output;

use clap::Parser;
use theme_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load `.env` from the working directory or the nearest parent that has one.
fn load_env_file() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut config = ObservabilityConfig::from_env();
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = theme_observability::init(config) {
        output::warning(&format!("logging disabled: {e}"));
    }
    tracing::debug!(
        app = theme_constant::app::DISPLAY_NAME,
        version = theme_constant::app::VERSION,
        "starting {}",
        theme_constant::app::NAME
    );

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
