//! Color space tags: how to interpret an RGB triple for display.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// A profile that specifies how to interpret a color value for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Extended sRGB. Components may fall outside 0..=1.
    #[default]
    Srgb,
    /// Extended sRGB with a linear transfer function.
    SrgbLinear,
    /// Display P3 primaries, D65 white point, sRGB transfer function.
    DisplayP3,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 3] = [
        ColorSpace::Srgb,
        ColorSpace::SrgbLinear,
        ColorSpace::DisplayP3,
    ];

    /// Stable name, used in archives and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::SrgbLinear => "sRGBLinear",
            ColorSpace::DisplayP3 => "displayP3",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ThemeError;

    /// Accepts the stable names case-insensitively, plus `srgb-linear` and `p3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" => Ok(ColorSpace::Srgb),
            "srgblinear" | "srgb-linear" | "linear" => Ok(ColorSpace::SrgbLinear),
            "displayp3" | "display-p3" | "p3" => Ok(ColorSpace::DisplayP3),
            other => Err(ThemeError::InvalidInput(format!("unknown color space: {other}"))),
        }
    }
}
