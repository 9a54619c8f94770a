//! `encode` and `decode`: resolved color records on disk.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use theme_core::{ColorSpace, PlatformColor, ResolvedColor};
use theme_observability::{codec_span, record_duration, record_error};

use super::show_color;
use crate::output;

pub fn encode(
    red: f32,
    green: f32,
    blue: f32,
    opacity: f32,
    space: &str,
    description: Option<String>,
    out: Option<&Path>,
) -> Result<()> {
    let space: ColorSpace = space.parse()?;
    let mut color: ResolvedColor = ResolvedColor::from_components(space, red, green, blue, opacity);
    if let Some(description) = description {
        color = ResolvedColor::new(
            description,
            red,
            green,
            blue,
            opacity,
            color.native().clone(),
        );
    }

    let bytes = color.to_bytes()?;
    match out {
        Some(path) => {
            std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
            output::success(&format!("wrote {} bytes to {}", bytes.len(), path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn decode(input: &Path) -> Result<()> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("read stdin")?;
        buf
    } else {
        std::fs::read(input).with_context(|| format!("read {}", input.display()))?
    };

    let span = codec_span!("decode", bytes.len());
    let _guard = span.enter();
    let start = Instant::now();

    let color = match ResolvedColor::<PlatformColor>::from_bytes(&bytes) {
        Ok(color) => color,
        Err(e) => {
            record_error(&e);
            return Err(e).context("decode resolved color");
        }
    };
    record_duration("codec.duration_ms", start.elapsed());

    show_color("decoded color", &color);
    Ok(())
}
