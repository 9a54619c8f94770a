//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect semantic palettes and encode or decode resolved colors
#[derive(Parser)]
#[command(name = "themectl", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the fifteen roles of a preset
    Palette {
        /// light or dark. Uses THEME_APPEARANCE env if not set.
        #[arg(short, long)]
        appearance: Option<String>,
    },
    /// Resolve one role of a preset
    Resolve {
        /// Role name, e.g. primary, accent, border
        role: String,
        /// light or dark. Uses THEME_APPEARANCE env if not set.
        #[arg(short, long)]
        appearance: Option<String>,
        /// Resolve the role's own channels instead of the fixed per-appearance color
        #[arg(long)]
        own_channels: bool,
        /// Write the encoded record to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Encode a color from components
    #[command(allow_negative_numbers = true)]
    Encode {
        red: f32,
        green: f32,
        blue: f32,
        /// Opacity, 0 (transparent) to 1 (opaque)
        #[arg(long, default_value_t = 1.0)]
        opacity: f32,
        /// sRGB, sRGBLinear or displayP3
        #[arg(long, default_value = "sRGB")]
        space: String,
        /// Description to store instead of the generated hex string
        #[arg(long)]
        description: Option<String>,
        /// Write the record to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decode an encoded record and show its fields
    Decode {
        /// Path to the record, or - for stdin
        input: PathBuf,
    },
}
