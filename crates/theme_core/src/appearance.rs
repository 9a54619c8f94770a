//! Theme appearance and the display context colors are resolved in.

use std::str::FromStr;

use crate::error::ThemeError;

/// Whether the theme is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
    pub fn is_light(self) -> bool {
        matches!(self, Appearance::Light)
    }

    pub fn name(self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }

    /// Reads `THEME_APPEARANCE`; unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let key = theme_constant::app::APPEARANCE_ENV;
        match std::env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(env = key, value = %raw, error = %e, "ignoring appearance override");
                Appearance::default()
            }),
            Err(_) => Appearance::default(),
        }
    }
}

impl FromStr for Appearance {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            other => Err(ThemeError::InvalidInput(format!("unknown appearance: {other}"))),
        }
    }
}

/// What the enclosing UI framework hands to [`Color::resolve`](crate::Color::resolve).
/// Only the appearance is consumed.
pub trait DisplayContext {
    fn appearance(&self) -> Appearance;

    fn is_dark(&self) -> bool {
        self.appearance().is_dark()
    }
}

impl DisplayContext for Appearance {
    fn appearance(&self) -> Appearance {
        *self
    }
}
