//! `palette` and `resolve`: inspect the built-in presets.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use theme_core::resolved::describe;
use theme_core::{preset_for, Appearance, ColorRole, ResolvedColor};

use super::show_color;
use crate::output;

#[derive(Serialize)]
struct PaletteRow {
    role: &'static str,
    hex: String,
    red: f32,
    green: f32,
    blue: f32,
}

pub fn list(appearance: Appearance) -> Result<()> {
    let set = preset_for(appearance);
    tracing::debug!(preset = set.name(), "listing palette");

    let rows: Vec<PaletteRow> = set
        .roles()
        .into_iter()
        .map(|(role, color)| PaletteRow {
            role: role.name(),
            hex: describe(color.red, color.green, color.blue, 1.0)[..7].to_string(),
            red: color.red,
            green: color.green,
            blue: color.blue,
        })
        .collect();

    output::header(&format!("{} color set", set.name()));
    let mut table = output::table();
    output::table_header(&mut table, &["Role", "Hex", "Red", "Green", "Blue"]);
    for row in &rows {
        output::table_row(
            &mut table,
            row.role,
            &[
                row.hex.clone(),
                format!("{:.3}", row.red),
                format!("{:.3}", row.green),
                format!("{:.3}", row.blue),
            ],
        );
    }
    output::table_print(&table, &rows);
    Ok(())
}

pub fn resolve(
    role: &str,
    appearance: Appearance,
    own_channels: bool,
    out: Option<&Path>,
) -> Result<()> {
    let role: ColorRole = role.parse()?;
    let set = preset_for(appearance);
    let color = set.color(role);

    let resolved: ResolvedColor = if own_channels {
        color.resolve_components(&appearance)
    } else {
        color.resolve(&appearance)
    };

    show_color(&format!("{role} ({})", appearance.name()), &resolved);

    if let Some(path) = out {
        let bytes = resolved.to_bytes()?;
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        output::success(&format!("wrote {} bytes to {}", bytes.len(), path.display()));
    }
    Ok(())
}
