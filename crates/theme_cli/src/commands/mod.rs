//! Command dispatch.

pub mod codec;
pub mod palette;

use anyhow::{Context, Result};
use serde::Serialize;
use theme_core::{Appearance, NativeColor, ResolvedColor};

use crate::cli::{Cli, Command};
use crate::output;

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Palette { appearance } => palette::list(appearance_or_env(appearance)?),
        Command::Resolve {
            role,
            appearance,
            own_channels,
            out,
        } => palette::resolve(&role, appearance_or_env(appearance)?, own_channels, out.as_deref()),
        Command::Encode {
            red,
            green,
            blue,
            opacity,
            space,
            description,
            out,
        } => codec::encode(red, green, blue, opacity, &space, description, out.as_deref()),
        Command::Decode { input } => codec::decode(&input),
    }
}

fn appearance_or_env(arg: Option<String>) -> Result<Appearance> {
    match arg {
        Some(raw) => raw.parse().context("--appearance"),
        None => Ok(Appearance::from_env()),
    }
}

/// Flat view of a resolved color for printing.
#[derive(Serialize)]
pub struct ColorView {
    description: String,
    red: f32,
    green: f32,
    blue: f32,
    linear_red: f32,
    linear_green: f32,
    linear_blue: f32,
    opacity: f32,
    native_space: String,
    native_components: [f32; 4],
}

impl From<&ResolvedColor> for ColorView {
    fn from(color: &ResolvedColor) -> Self {
        Self {
            description: color.description().to_string(),
            red: color.red(),
            green: color.green(),
            blue: color.blue(),
            linear_red: color.linear_red(),
            linear_green: color.linear_green(),
            linear_blue: color.linear_blue(),
            opacity: color.opacity(),
            native_space: color.native().color_space().to_string(),
            native_components: color.native().components(),
        }
    }
}

pub fn show_color(title: &str, color: &ResolvedColor) {
    let view = ColorView::from(color);
    if output::is_json() {
        output::data(title, &view);
        return;
    }
    output::header(title);
    output::kv("description", &view.description);
    output::kv("rgba", &format!("{} {} {} {}", view.red, view.green, view.blue, view.opacity));
    output::kv(
        "linear",
        &format!("{} {} {}", view.linear_red, view.linear_green, view.linear_blue),
    );
    let [r, g, b, a] = view.native_components;
    output::kv("native", &format!("{} [{r} {g} {b} {a}]", view.native_space));
}
